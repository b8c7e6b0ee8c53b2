//! Core types for lazycheck
//!
//! This crate holds everything the condition chains are built from:
//! - ConditionState / Outcome: the resolve-once state machine's states
//! - CheckError / ConditionFailure: caller-facing errors vs captured failures
//! - Verdict: what a condition may return
//! - CheckOptions: null-check timing and panic capture
//! - require: non-null assertions over `Option`
//! - conditions: small reusable conditions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod conditions;
pub mod error;
pub mod options;
pub mod require;
pub mod state;
pub mod verdict;

pub use error::{BoxError, CheckError, ConditionFailure, FailureOrigin, Result};
pub use options::{CheckOptions, NullCheck};
pub use require::{
    require_all, require_all_msg, require_non_null, require_non_null_msg, require_non_null_with,
};
pub use state::{ConditionState, Outcome};
pub use verdict::Verdict;
