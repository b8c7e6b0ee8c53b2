//! Error types for lazy condition chains
//!
//! Two kinds of failure exist and they are kept apart on purpose:
//!
//! - [`CheckError`] is returned to the caller: a required value was missing,
//!   or an unhandled condition failure was asked for explicitly.
//! - [`ConditionFailure`] is what a condition produced instead of a verdict.
//!   It is captured by the chain and only surfaces through an exception
//!   branch, `failure()` or `into_result()`.

use std::any::Any;
use std::fmt;
use thiserror::Error;

/// Boxed error type a condition may fail with
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for chain construction and fallible operators
pub type Result<T> = std::result::Result<T, CheckError>;

/// Errors returned to the caller of a chain
#[derive(Debug, Error)]
pub enum CheckError {
    /// A required argument, condition or callback was `None`
    #[error("{message}")]
    NullArgument {
        /// Description of what was missing
        message: String,
    },

    /// The condition failed and no exception branch handled it
    #[error("unhandled condition failure: {0}")]
    UnhandledFailure(#[source] ConditionFailure),
}

impl CheckError {
    /// Create a null-argument error with the given message
    pub fn null_argument(message: impl Into<String>) -> Self {
        CheckError::NullArgument {
            message: message.into(),
        }
    }

    /// Check if this is a null-argument error
    pub fn is_null_argument(&self) -> bool {
        matches!(self, CheckError::NullArgument { .. })
    }

    /// Check if this wraps an unhandled condition failure
    pub fn is_unhandled_failure(&self) -> bool {
        matches!(self, CheckError::UnhandledFailure(_))
    }
}

/// Where a condition failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureOrigin {
    /// The condition returned an error (or a missing verdict)
    Error,
    /// The condition panicked and panic capture was enabled
    Panic,
}

/// A failure produced by a condition instead of a verdict
#[derive(Debug)]
pub struct ConditionFailure {
    origin: FailureOrigin,
    source: BoxError,
}

impl ConditionFailure {
    /// Wrap an error returned by a condition
    pub fn from_source(source: impl Into<BoxError>) -> Self {
        ConditionFailure {
            origin: FailureOrigin::Error,
            source: source.into(),
        }
    }

    /// Create a failure from a plain message
    pub fn msg(message: impl Into<String>) -> Self {
        Self::from_source(message.into())
    }

    /// Convert a panic payload caught while evaluating a condition
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "condition panicked with a non-string payload".to_string()
        };
        ConditionFailure {
            origin: FailureOrigin::Panic,
            source: message.into(),
        }
    }

    /// Where this failure came from
    pub fn origin(&self) -> FailureOrigin {
        self.origin
    }

    /// Check if the condition panicked
    pub fn is_panic(&self) -> bool {
        self.origin == FailureOrigin::Panic
    }

    /// Borrow the underlying error
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.source.as_ref()
    }

    /// Take the underlying error
    pub fn into_inner(self) -> BoxError {
        self.source
    }

    /// Try to view the underlying error as a concrete type
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref::<E>()
    }
}

impl fmt::Display for ConditionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            FailureOrigin::Error => write!(f, "condition failed: {}", self.source),
            FailureOrigin::Panic => write!(f, "condition panicked: {}", self.source),
        }
    }
}

impl std::error::Error for ConditionFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}
