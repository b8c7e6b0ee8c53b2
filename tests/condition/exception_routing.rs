//! Failing conditions and the exception branch

use crate::common::{init_tracing, Probe};
use lazycheck::conditions::failing;
use lazycheck::prelude::*;
use std::fmt;

#[derive(Debug)]
struct QuotaExceeded {
    used: u32,
}

impl fmt::Display for QuotaExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quota exceeded at {}", self.used)
    }
}

impl std::error::Error for QuotaExceeded {}

#[test]
fn test_true_and_false_branches_skipped_on_failure() {
    init_tracing();
    let probe = Probe::new();
    let handler = Probe::new();

    when(probe.failing_condition("unavailable"))
        .is_true_run(handler.action())
        .is_false_run(handler.action())
        .is_exception(handler.action())
        .is_exception(handler.action());

    assert_eq!(probe.calls(), 1);
    assert_eq!(handler.calls(), 1);
}

#[test]
fn test_handler_outside_chain_not_run_for_true_false() {
    let outside = Probe::new();
    when(failing("bad"))
        .is_true_run(outside.action())
        .is_false_run(outside.action())
        .is_exception(|| {});
    assert_eq!(outside.calls(), 0);
}

#[test]
fn test_failure_absorbed_without_handler() {
    let chain = when(failing("ignored")).is_true(1).is_false(2);
    assert_eq!(chain.state(), ConditionState::Exception);
    assert_eq!(chain.value(), None);
}

#[test]
fn test_into_result_surfaces_unhandled_failure() {
    let err = when(failing("no handler")).is_true(1).into_result().unwrap_err();
    assert!(err.is_unhandled_failure());
    assert!(err.to_string().contains("no handler"));
}

#[test]
fn test_into_result_ok_once_handled() {
    let result = when(failing("handled"))
        .is_true(1)
        .is_exception(|| {})
        .into_result();
    assert_eq!(result.unwrap(), None);
}

#[test]
fn test_failure_is_inspectable_with_its_type() {
    let chain = when(|| -> Result<bool, QuotaExceeded> { Err(QuotaExceeded { used: 120 }) })
        .is_exception(|| {});

    let failure = chain.failure().expect("failure should be captured");
    assert!(!failure.is_panic());
    let quota = failure.downcast_ref::<QuotaExceeded>().unwrap();
    assert_eq!(quota.used, 120);
}

#[test]
fn test_missing_verdict_routes_to_exception() {
    let value = when(|| None::<bool>)
        .is_true("yes")
        .is_exception(|| {})
        .value();
    assert_eq!(value, None);
}

#[test]
fn test_predicate_failure_routes_to_exception() {
    let handled = Probe::new();
    when_with(|raw: &&str| raw.parse::<bool>(), "not a bool")
        .is_true_accept(|_| unreachable!())
        .is_false_accept(|_| unreachable!())
        .is_exception(handled.action());
    assert_eq!(handled.calls(), 1);
}

#[test]
fn test_value_chain_with_exception_fallback() {
    let fallback = Probe::new();
    let value = when(failing("down"))
        .is_true_compute(|| "primary")
        .is_false_compute(|| "secondary")
        .is_exception(fallback.action())
        .value();
    assert_eq!(value, None);
    assert_eq!(fallback.calls(), 1);
}
