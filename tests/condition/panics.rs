//! Panicking conditions and callbacks

use crate::common::{init_tracing, Probe};
use lazycheck::prelude::*;

fn catching() -> CheckBuilder {
    CheckBuilder::new().catch_panics(true)
}

#[test]
fn test_captured_panic_routes_to_exception() {
    init_tracing();
    let handler = Probe::new();

    let chain = catching()
        .when(|| -> bool { panic!("boom") })
        .is_true_run(|| unreachable!())
        .is_exception(handler.action());

    assert_eq!(handler.calls(), 1);
    let failure = chain.failure().unwrap();
    assert!(failure.is_panic());
    assert_eq!(failure.inner().to_string(), "boom");
}

#[test]
fn test_captured_predicate_panic() {
    let value = catching()
        .when_with(
            |n: &i32| -> bool {
                if *n < 0 {
                    panic!("negative input {}", n);
                }
                true
            },
            -4,
        )
        .is_true("ok")
        .value();
    assert_eq!(value, None);
}

#[test]
fn test_captured_panic_surfaces_through_into_result() {
    let err = catching()
        .when(|| -> bool { panic!("late") })
        .is_true(1)
        .into_result()
        .unwrap_err();
    assert!(err.is_unhandled_failure());
    assert!(err.to_string().contains("late"));
}

#[test]
#[should_panic(expected = "boom")]
fn test_condition_panic_propagates_by_default() {
    when(|| -> bool { panic!("boom") }).is_true_run(|| {});
}

#[test]
#[should_panic(expected = "callback")]
fn test_callback_panic_always_propagates() {
    catching().when(|| true).is_true_run(|| panic!("callback"));
}
