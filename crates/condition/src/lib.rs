//! Lazy condition chains
//!
//! This crate implements the fluent "when / is_true / is_false / is_exception"
//! chains:
//! - Resolver: resolve-once state machine, evaluates the condition at most once
//! - NoArgCheckResult: chain over a zero-argument condition
//! - OneArgCheckResult: chain over a predicate and a captured argument
//! - CheckBuilder: `when*` / `in_case*` entry points with shared options
//!
//! Chains are moved through every call, so a chain always has exactly one
//! owner and is never shared between threads mid-resolution.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod no_arg;
pub mod one_arg;
mod resolver;
pub mod slot;

pub use builder::{
    in_case, in_case_value, in_case_with, try_in_case, try_in_case_value, try_in_case_with,
    try_when, try_when_value, try_when_with, when, when_value, when_with, CheckBuilder,
};
pub use no_arg::NoArgCheckResult;
pub use one_arg::OneArgCheckResult;
pub use slot::{NoValue, ValueSlot, Valued};
