//! Conversion error types.

use thiserror::Error;

/// A fatal conversion fault.
///
/// Every variant carries enough context to point at the offending record.
/// No output is produced when any of these occur.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("state {index}: id {id:?} is not an integer")]
    InvalidStateId { index: usize, id: String },

    #[error("transition {index}: {field} reference {value:?} is not an integer")]
    MalformedReference {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("transition {index}: {field} reference {value:?} names no known state")]
    UnresolvedReference {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("no state is marked initial")]
    MissingInitialState,

    #[error("states {first:?} and {second:?} are both marked initial")]
    MultipleInitialStates { first: String, second: String },
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
