//! Precondition helpers
//!
//! Every public entry point validates its arguments through these before
//! touching the input, so errors are raised eagerly and never alongside a
//! partial result.

use crate::error::{CoreError, Result};

/// Unwrap a required argument, failing with [`CoreError::NullInput`]
///
/// # Arguments
/// * `value` - The possibly absent argument
/// * `name` - Argument name reported in the error
pub fn require_non_null<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(CoreError::NullInput { name })
}

/// Unwrap a required argument, building the error with `err` when absent
pub fn require_non_null_or<T, E, F>(value: Option<T>, err: F) -> std::result::Result<T, E>
where
    F: FnOnce() -> E,
{
    value.ok_or_else(err)
}

/// Require `x >= 0`
pub fn require_positive(x: i64, name: &'static str) -> Result<i64> {
    if x < 0 {
        return Err(CoreError::InvalidArgument {
            name,
            reason: format!("must not be negative, got {x}"),
        });
    }
    Ok(x)
}

/// Require `x > 0`, returning it as a `usize` bound
pub fn require_strictly_positive(x: i64, name: &'static str) -> Result<usize> {
    if x <= 0 {
        return Err(CoreError::InvalidArgument {
            name,
            reason: format!("must be greater than 0, got {x}"),
        });
    }
    usize::try_from(x).map_err(|_| CoreError::InvalidArgument {
        name,
        reason: format!("{x} does not fit in the address space"),
    })
}
