//! Condition Chain Integration Tests
//!
//! Exercises the public `lazycheck` surface end to end.
//!
//! ## Modules
//!
//! - `scenarios`: documented end-to-end chains
//! - `laziness`: at-most-once evaluation and first-match-wins, property-tested
//! - `exception_routing`: failing conditions and the exception branch
//! - `null_checks`: `try_*` entry points and both null-check timings
//! - `argument_binding`: predicate/argument chains
//! - `panics`: panic capture for conditions, propagation for callbacks
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test condition
//! cargo test --test condition null_checks::
//! ```

#[path = "../common/mod.rs"]
mod common;

mod exception_routing;
mod laziness;
mod null_checks;
mod panics;
