//! # lazycheck
//!
//! Lazy, evaluate-once conditional chains.
//!
//! A chain wraps a condition and any number of branches. The condition runs
//! at most once, when the first branch is reached, and the first branch whose
//! outcome matches wins.
//!
//! ## Quick Start
//!
//! ```ignore
//! use lazycheck::prelude::*;
//!
//! // Exact values
//! let label = when(|| stock > 0).is_true("in stock").is_false("sold out").value();
//!
//! // Side effects, with a handler for a failing condition
//! when(|| config.load())
//!     .is_true_run(|| start())
//!     .is_false_run(|| warn_disabled())
//!     .is_exception(|| report_broken_config());
//!
//! // Predicate over a captured argument
//! let shown = when_with(|name: &String| name.is_empty(), name)
//!     .is_true_compute(|| "anonymous".to_string())
//!     .is_false_map(|name| name.clone())
//!     .value();
//! ```
//!
//! ## Failures
//!
//! - A condition that fails (returns `Err`, returns `None`, or panics with
//!   [`CheckOptions::catch_panics`] enabled) is captured and routed to the
//!   `is_exception` branch. Without one, it is absorbed silently; call
//!   `into_result()` to surface it.
//! - Panics in branch callbacks always propagate.
//! - `try_*` entry points and operators take `Option` inputs and reject
//!   `None` with [`CheckError::NullArgument`].

#![warn(missing_docs)]

pub mod prelude;

// Re-export the chain surface
pub use lazycheck_condition::{
    in_case, in_case_value, in_case_with, try_in_case, try_in_case_value, try_in_case_with,
    try_when, try_when_value, try_when_with, when, when_value, when_with, CheckBuilder,
    NoArgCheckResult, NoValue, OneArgCheckResult, ValueSlot, Valued,
};

// Re-export core types
pub use lazycheck_core::{
    conditions, require, BoxError, CheckError, CheckOptions, ConditionFailure, ConditionState,
    FailureOrigin, NullCheck, Outcome, Result, Verdict,
};
