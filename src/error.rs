//! The error taxonomy.
//!
//! Only [`FaError`] crosses the public API boundary. `BadParse` and `NoTransition` are
//! internal markers: the parser converts the former into `FaError::BadRegex` at the
//! `Fa::from_regex` boundary, and the matchers convert the latter into a plain reject or
//! into "advance the search start and retry" — neither ever escapes this crate.
use thiserror::Error;

use crate::automaton::State;
use crate::symbol::Symbol;

/// Errors surfaced by the public API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FaError {
    /// The given pattern could not be parsed as a regular expression.
    #[error("could not parse \"{0}\" as a regular expression")]
    BadRegex(String),
}

/// Internal marker: the shift/reduce driver did not collapse to a single expression.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("regex did not reduce to a single expression")]
pub(crate) struct BadParse;

/// Internal marker: a DFA has no outgoing edge for `(state, symbol)`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no transition from {0:?} on {1:?}")]
pub(crate) struct NoTransition(pub State, pub Symbol);
