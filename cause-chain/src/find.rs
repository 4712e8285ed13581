use std::error::Error;

use crate::cause_chain;

/// Finds the first error in the causal chain matching the given predicate.
///
/// The first test is done on `error` itself. If it matches, no sources are
/// examined, even if present. Otherwise the walk follows
/// [`source`](Error::source) and tests each error in turn, returning the
/// first match or `None` if the chain ends without one.
///
/// A panic raised by `predicate` aborts the walk and propagates to the
/// caller unchanged.
///
/// # Example
///
/// ```
/// use thiserror::Error;
///
/// #[derive(Debug, Error)]
/// #[error("permission denied")]
/// struct AccessError;
///
/// #[derive(Debug, Error)]
/// #[error("upload failed")]
/// struct UploadError(#[source] AccessError);
///
/// let chain = UploadError(AccessError);
///
/// let found = cause_chain::find_cause(&chain, |error| error.is::<AccessError>());
/// assert!(found.is_some());
/// ```
pub fn find_cause<'a, P>(
    error: &'a (dyn Error + 'static),
    mut predicate: P,
) -> Option<&'a (dyn Error + 'static)>
where
    P: FnMut(&(dyn Error + 'static)) -> bool,
{
    cause_chain(error).find(|error| predicate(*error))
}

/// Finds the first error in the causal chain with the given type.
///
/// This is a specialization of [`find_cause`] using a
/// [`downcast`](Error::downcast_ref) test as the predicate. The match is
/// returned downcast to `T`, so the payload of the matching error is
/// directly accessible.
///
/// # Example
///
/// ```
/// use thiserror::Error;
///
/// #[derive(Debug, Error)]
/// #[error("quota exceeded for project {project}")]
/// struct QuotaError {
///     project: u64,
/// }
///
/// #[derive(Debug, Error)]
/// #[error("envelope rejected")]
/// struct RejectError(#[source] QuotaError);
///
/// let chain = RejectError(QuotaError { project: 42 });
///
/// let quota = cause_chain::find_cause_by_type::<QuotaError>(&chain);
/// assert_eq!(quota.map(|quota| quota.project), Some(42));
/// ```
pub fn find_cause_by_type<'a, T>(error: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    find_cause(error, |error| error.is::<T>())?.downcast_ref()
}

/// Returns `true` if any error in the causal chain matches the predicate.
///
/// Equivalent to `find_cause(error, predicate).is_some()`.
pub fn has_cause<P>(error: &(dyn Error + 'static), predicate: P) -> bool
where
    P: FnMut(&(dyn Error + 'static)) -> bool,
{
    find_cause(error, predicate).is_some()
}

/// Returns `true` if any error in the causal chain has the given type.
///
/// Equivalent to `find_cause_by_type::<T>(error).is_some()`.
pub fn has_cause_by_type<T>(error: &(dyn Error + 'static)) -> bool
where
    T: Error + 'static,
{
    find_cause_by_type::<T>(error).is_some()
}

#[cfg(test)]
mod tests {
    use thiserror::Error;

    use super::*;

    #[derive(Debug, Error)]
    #[error("{message}")]
    struct Wrapped {
        message: &'static str,
        #[source]
        source: Option<Box<dyn Error + 'static>>,
    }

    fn wrap(message: &'static str, source: Option<Box<dyn Error + 'static>>) -> Wrapped {
        Wrapped { message, source }
    }

    #[test]
    fn test_root_match_short_circuits() {
        let leaf = wrap("leaf", None);
        let root = wrap("root", Some(Box::new(leaf)));

        let mut tested = 0;
        let found = find_cause(&root, |_| {
            tested += 1;
            true
        });

        assert_eq!(found.map(ToString::to_string).as_deref(), Some("root"));
        assert_eq!(tested, 1);
    }

    #[test]
    fn test_stops_at_first_match() {
        let leaf = wrap("leaf", None);
        let mid = wrap("trunk", Some(Box::new(leaf)));
        let root = wrap("root", Some(Box::new(mid)));

        let mut tested = 0;
        let found = find_cause(&root, |error| {
            tested += 1;
            error.to_string() == "trunk"
        });

        assert_eq!(found.map(ToString::to_string).as_deref(), Some("trunk"));
        // The leaf is never inspected once the mid-level error matches.
        assert_eq!(tested, 2);
    }

    #[test]
    fn test_no_match_returns_none() {
        let leaf = wrap("leaf", None);
        let root = wrap("root", Some(Box::new(leaf)));

        assert!(find_cause(&root, |_| false).is_none());
    }

    #[test]
    #[should_panic(expected = "predicate boom")]
    fn test_predicate_panic_propagates() {
        let root = wrap("root", None);

        find_cause(&root, |_| panic!("predicate boom"));
    }
}
