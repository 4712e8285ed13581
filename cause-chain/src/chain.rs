use std::error::Error;
use std::iter::FusedIterator;

/// Returns an iterator over the causal chain of `error`.
///
/// The iterator yields `error` itself first, then its [`source`](Error::source),
/// then that error's source, until a node without a source is reached. Every
/// node is borrowed from `error`; nothing is copied or retained.
///
/// # Example
///
/// ```
/// use std::io;
///
/// let error = io::Error::new(io::ErrorKind::NotFound, "no such file");
/// let messages: Vec<_> = cause_chain::cause_chain(&error)
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(messages, ["no such file"]);
/// ```
pub fn cause_chain<'a>(error: &'a (dyn Error + 'static)) -> CauseChain<'a> {
    CauseChain { next: Some(error) }
}

/// Iterator over a causal chain of errors, root first.
///
/// Created by [`cause_chain`].
#[derive(Clone)]
pub struct CauseChain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for CauseChain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let error = self.next?;
        self.next = error.source();
        Some(error)
    }
}

impl FusedIterator for CauseChain<'_> {}
