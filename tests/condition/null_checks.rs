//! Missing callbacks and the two validation timings

use crate::common::Probe;
use lazycheck::conditions::identity;
use lazycheck::prelude::*;

fn strict() -> CheckBuilder {
    CheckBuilder::with_options(CheckOptions::strict())
}

#[test]
fn test_missing_callback_on_firing_branch_fails() {
    let err = when_value(true).try_is_true_run(None::<fn()>).unwrap_err();
    assert!(err.is_null_argument());
    assert_eq!(err.to_string(), "action must not be null");
}

#[test]
fn test_missing_callback_on_skipped_branch_is_ignored_by_default() {
    let probe = Probe::new();
    let chain = when(probe.condition(false))
        .try_is_true_run(None::<fn()>)
        .unwrap()
        .is_false_run(|| {});
    assert!(chain.is_resolved());
    assert_eq!(probe.calls(), 1);
}

#[test]
fn test_missing_callback_after_resolution_is_ignored() {
    let probe = Probe::new();
    let chain = strict()
        .when(|| true)
        .is_true_run(|| {})
        .try_is_false_run(None::<fn()>)
        .unwrap()
        .try_is_exception(None::<fn()>)
        .unwrap();
    assert!(chain.is_resolved());

    let chain = when(probe.condition(true))
        .is_true_run(probe.action())
        .try_is_true_run(None::<fn()>)
        .unwrap();
    assert!(chain.is_resolved());
    assert_eq!(probe.calls(), 2);
}

#[test]
fn test_strict_rejects_before_evaluating() {
    let probe = Probe::new();
    let err = strict()
        .when(probe.condition(false))
        .try_is_true_run(None::<fn()>)
        .unwrap_err();
    assert!(err.is_null_argument());
    assert_eq!(probe.calls(), 0);
}

#[test]
fn test_strict_rejects_missing_producer_on_skipped_branch() {
    let err = strict()
        .when(|| false)
        .try_is_true_compute(None::<fn() -> i32>)
        .unwrap_err();
    assert_eq!(err.to_string(), "producer must not be null");
}

#[test]
fn test_default_accepts_missing_producer_on_skipped_branch() {
    let value = when(|| false)
        .try_is_true_compute(None::<fn() -> i32>)
        .unwrap()
        .is_false(9)
        .value();
    assert_eq!(value, Some(9));
}

#[test]
fn test_missing_exception_handler_fails_only_on_failure() {
    let ok = when(|| true).try_is_exception(None::<fn()>);
    assert!(ok.is_ok());

    let err = when(|| Err::<bool, _>("broken"))
        .try_is_exception(None::<fn()>)
        .unwrap_err();
    assert!(err.is_null_argument());
}

#[test]
fn test_one_arg_missing_consumer_and_mapper() {
    let err = when_with(identity, true)
        .try_is_true_accept(None::<fn(&bool)>)
        .unwrap_err();
    assert_eq!(err.to_string(), "consumer must not be null");

    let err = when_with(identity, false)
        .try_is_false_map(None::<fn(&bool) -> u8>)
        .unwrap_err();
    assert_eq!(err.to_string(), "mapper must not be null");
}

#[test]
fn test_one_arg_present_callbacks_behave_like_plain_operators() {
    let value = when_with(|n: &u32| *n > 10, 42)
        .try_is_true_map(Some(|n: &u32| n * 2))
        .unwrap()
        .try_is_false_map(Some(|_: &u32| 0u32))
        .unwrap()
        .value();
    assert_eq!(value, Some(84));
}

#[test]
fn test_null_value_is_not_a_null_callback() {
    let value = when_value(true)
        .is_true(None::<&str>)
        .try_is_false_compute(Some(|| Some("never")))
        .unwrap()
        .value();
    assert_eq!(value, Some(None));
}

#[test]
fn test_try_factories_reject_missing_inputs() {
    assert!(try_when(None::<fn() -> bool>).unwrap_err().is_null_argument());
    assert!(try_in_case_value(None).unwrap_err().is_null_argument());

    let err = try_when_with(Some(identity), None).unwrap_err();
    assert_eq!(err.to_string(), "argument must not be null");
}
