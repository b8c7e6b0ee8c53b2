//! Convenient imports for lazycheck.
//!
//! ```ignore
//! use lazycheck::prelude::*;
//!
//! let parity = when_with(|n: &u32| n % 2 == 0, 7).is_true("even").is_false("odd").value();
//! ```

// Entry points
pub use crate::{
    in_case, in_case_value, in_case_with, try_in_case, try_in_case_value, try_in_case_with,
    try_when, try_when_value, try_when_with, when, when_value, when_with, CheckBuilder,
};

// Chain types
pub use crate::{NoArgCheckResult, OneArgCheckResult};

// Error handling
pub use crate::{CheckError, ConditionFailure};

// Options and states
pub use crate::{CheckOptions, ConditionState, NullCheck, Outcome};
