//! Core error types (deterministic only)

use thiserror::Error;

/// Category of a [`CoreError`], for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required input was absent
    NullInput,
    /// An argument was outside its allowed range
    InvalidArgument,
    /// A position fell outside the input
    IndexOutOfBounds,
}

/// Core algorithm errors (no I/O, no external failures)
///
/// All of them signal caller misuse and are raised before any work is done.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A required input was absent
    #[error("required input `{name}` is absent")]
    NullInput {
        /// Name of the missing argument
        name: &'static str,
    },

    /// An argument was outside its allowed range
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// What the argument was expected to satisfy
        reason: String,
    },

    /// A character index fell outside the input
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The requested character index
        index: usize,
        /// Length of the input in characters
        len: usize,
    },
}

impl CoreError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::NullInput { .. } => ErrorKind::NullInput,
            CoreError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            CoreError::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
