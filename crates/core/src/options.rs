//! Options controlling how a chain validates callbacks and evaluates its
//! condition.
//!
//! ```ignore
//! use lazycheck_core::{CheckOptions, NullCheck};
//!
//! let opts = CheckOptions::new()
//!     .null_check(NullCheck::WhileUnresolved)
//!     .catch_panics(true);
//! ```

use serde::{Deserialize, Serialize};

/// When a missing (`None`) callback passed to a `try_*` operator is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NullCheck {
    /// Reject only when the branch is about to fire
    OnFire,
    /// Reject whenever the chain is still unresolved, before the condition
    /// is evaluated and regardless of whether the branch would match
    WhileUnresolved,
}

impl Default for NullCheck {
    fn default() -> Self {
        NullCheck::OnFire
    }
}

/// Options for building condition chains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOptions {
    /// Timing of null-callback validation
    pub null_check: NullCheck,
    /// Capture a panicking condition as a failure instead of unwinding
    ///
    /// Panics raised by callbacks always propagate.
    pub catch_panics: bool,
}

impl CheckOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Eager null checks, panics propagate
    pub fn strict() -> Self {
        CheckOptions {
            null_check: NullCheck::WhileUnresolved,
            catch_panics: false,
        }
    }

    /// Set the null-callback validation timing
    pub fn null_check(mut self, null_check: NullCheck) -> Self {
        self.null_check = null_check;
        self
    }

    /// Enable or disable panic capture for conditions
    pub fn catch_panics(mut self, catch_panics: bool) -> Self {
        self.catch_panics = catch_panics;
        self
    }
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            null_check: NullCheck::OnFire,
            catch_panics: false,
        }
    }
}
