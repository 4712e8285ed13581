//! Causal-chain inspection for errors.
//!
//! Errors commonly wrap an underlying cause, forming a singly-linked chain
//! reachable through [`Error::source`](std::error::Error::source). This crate
//! walks that chain and returns the first error matching a caller-supplied
//! condition. It only reads and classifies chains, it never mutates them.
//!
//! # Finding a cause
//!
//! [`find_cause`] tests the root error first and follows `source()` until the
//! predicate matches or the chain ends:
//!
//! ```
//! use thiserror::Error;
//!
//! #[derive(Debug, Error)]
//! #[error("connection reset")]
//! struct ConnectError;
//!
//! #[derive(Debug, Error)]
//! #[error("query failed")]
//! struct QueryError(#[source] ConnectError);
//!
//! let chain = QueryError(ConnectError);
//!
//! let found = cause_chain::find_cause(&chain, |error| error.is::<ConnectError>());
//! assert_eq!(found.map(ToString::to_string).as_deref(), Some("connection reset"));
//! ```
//!
//! # Finding a cause by type
//!
//! [`find_cause_by_type`] looks up the nearest error of a concrete type and
//! returns it downcast to that type:
//!
//! ```
//! # use thiserror::Error;
//! #
//! # #[derive(Debug, Error)]
//! # #[error("connection reset")]
//! # struct ConnectError;
//! #
//! # #[derive(Debug, Error)]
//! # #[error("query failed")]
//! # struct QueryError(#[source] ConnectError);
//! #
//! let chain = QueryError(ConnectError);
//!
//! let connect: Option<&ConnectError> = cause_chain::find_cause_by_type(&chain);
//! assert!(connect.is_some());
//! assert!(cause_chain::has_cause_by_type::<ConnectError>(&chain));
//! assert!(!cause_chain::has_cause_by_type::<std::fmt::Error>(&chain));
//! ```
//!
//! # Iterating the chain
//!
//! [`cause_chain`] yields every error in the chain, root first:
//!
//! ```
//! # use thiserror::Error;
//! #
//! # #[derive(Debug, Error)]
//! # #[error("connection reset")]
//! # struct ConnectError;
//! #
//! # #[derive(Debug, Error)]
//! # #[error("query failed")]
//! # struct QueryError(#[source] ConnectError);
//! #
//! let chain = QueryError(ConnectError);
//! assert_eq!(cause_chain::cause_chain(&chain).count(), 2);
//! ```
//!
//! "Not found" is an ordinary [`None`], never an error. The only failure that
//! can occur is a panic raised by the caller's predicate, which propagates
//! unchanged.

#![warn(missing_docs)]

mod chain;
pub use chain::*;

mod find;
pub use find::*;
