//! Non-null assertions
//!
//! `None` plays the role of a null reference. Each helper hands the present
//! value back unchanged or fails with [`CheckError::NullArgument`].

use crate::error::{CheckError, Result};

/// Message used when the caller gives none
pub const DEFAULT_NULL_MESSAGE: &str = "required value is null";

/// Return the value if present
pub fn require_non_null<T>(value: Option<T>) -> Result<T> {
    value.ok_or_else(|| CheckError::null_argument(DEFAULT_NULL_MESSAGE))
}

/// Return the value if present, failing with `message` otherwise
pub fn require_non_null_msg<T>(value: Option<T>, message: impl Into<String>) -> Result<T> {
    match value {
        Some(v) => Ok(v),
        None => Err(CheckError::null_argument(message)),
    }
}

/// Return the value if present; the message is only built on failure
pub fn require_non_null_with<T, M>(value: Option<T>, message: M) -> Result<T>
where
    M: FnOnce() -> String,
{
    value.ok_or_else(|| CheckError::null_argument(message()))
}

/// Require every value to be present
///
/// Fails on the first missing value and reports its position.
pub fn require_all<T, I>(values: I) -> Result<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            require_non_null_with(value, || format!("value at position {} is null", index))
        })
        .collect()
}

/// Require every value to be present, failing with `message` otherwise
pub fn require_all_msg<T, I>(values: I, message: impl Into<String>) -> Result<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    let collected: Option<Vec<T>> = values.into_iter().collect();
    require_non_null_msg(collected, message)
}
