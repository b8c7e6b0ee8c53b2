//! At-most-once evaluation and first-match-wins
//!
//! Chains of random shape are checked against a small model: the first
//! branch whose outcome matches the realized outcome fires, nothing else does,
//! and the condition runs exactly once.

use crate::common::Probe;
use lazycheck::prelude::*;
use lazycheck::{Valued, Verdict};
use proptest::prelude::*;
use std::cell::Cell;

#[derive(Debug, Clone, Copy)]
enum Branch {
    True(u8),
    False(u8),
    TrueCompute(u8),
    TrueRun,
    FalseRun,
    Exception,
}

impl Branch {
    fn outcome(&self) -> Outcome {
        match self {
            Branch::True(_) | Branch::TrueCompute(_) | Branch::TrueRun => Outcome::True,
            Branch::False(_) | Branch::FalseRun => Outcome::False,
            Branch::Exception => Outcome::Exception,
        }
    }

    fn value(&self) -> Option<u8> {
        match self {
            Branch::True(v) | Branch::False(v) | Branch::TrueCompute(v) => Some(*v),
            Branch::TrueRun | Branch::FalseRun | Branch::Exception => None,
        }
    }
}

fn branch() -> impl Strategy<Value = Branch> {
    prop_oneof![
        any::<u8>().prop_map(Branch::True),
        any::<u8>().prop_map(Branch::False),
        any::<u8>().prop_map(Branch::TrueCompute),
        Just(Branch::TrueRun),
        Just(Branch::FalseRun),
        Just(Branch::Exception),
    ]
}

fn first_branch() -> impl Strategy<Value = Branch> {
    prop_oneof![
        any::<u8>().prop_map(Branch::True),
        any::<u8>().prop_map(Branch::False),
    ]
}

fn outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        Just(Outcome::True),
        Just(Outcome::False),
        Just(Outcome::Exception),
    ]
}

fn apply<C, V>(
    chain: NoArgCheckResult<C, Valued<u8>>,
    branch: Branch,
    runs: &Cell<usize>,
) -> NoArgCheckResult<C, Valued<u8>>
where
    C: FnOnce() -> V,
    V: Verdict,
{
    let run = || runs.set(runs.get() + 1);
    match branch {
        Branch::True(v) => chain.is_true(v),
        Branch::False(v) => chain.is_false(v),
        Branch::TrueCompute(v) => chain.is_true_compute(|| v),
        Branch::TrueRun => chain.is_true_run(run),
        Branch::FalseRun => chain.is_false_run(run),
        Branch::Exception => chain.is_exception(run),
    }
}

proptest! {
    #[test]
    fn prop_condition_runs_once_and_first_match_wins(
        realized in outcome(),
        first in first_branch(),
        rest in prop::collection::vec(branch(), 0..12),
    ) {
        let evaluations = Probe::new();
        let runs = Cell::new(0);

        let condition = || -> Result<bool, String> {
            evaluations.hit();
            match realized {
                Outcome::True => Ok(true),
                Outcome::False => Ok(false),
                Outcome::Exception => Err("failed".into()),
            }
        };

        let start = match first {
            Branch::True(v) => when(condition).is_true(v),
            Branch::False(v) => when(condition).is_false(v),
            _ => unreachable!(),
        };
        let chain = rest
            .iter()
            .fold(start, |chain, branch| apply(chain, *branch, &runs));

        let winner = std::iter::once(&first)
            .chain(rest.iter())
            .find(|b| b.outcome() == realized);

        prop_assert_eq!(evaluations.calls(), 1);
        prop_assert_eq!(chain.is_resolved(), winner.is_some());
        prop_assert_eq!(runs.get(), usize::from(winner.map_or(false, |b| b.value().is_none())));
        prop_assert_eq!(chain.value(), winner.and_then(|b| b.value()));
    }

    #[test]
    fn prop_repeated_same_branch_keeps_first_value(values in prop::collection::vec(any::<u16>(), 1..8)) {
        let chain = values
            .iter()
            .skip(1)
            .fold(when_value(true).is_true(values[0]), |chain, v| chain.is_true(*v));
        prop_assert_eq!(chain.value(), Some(values[0]));
    }
}

#[test]
fn test_unused_chain_never_evaluates() {
    let probe = Probe::new();
    let chain = when(probe.condition(true));
    assert_eq!(chain.state(), ConditionState::Unevaluated);
    drop(chain);
    assert_eq!(probe.calls(), 0);
}

#[test]
fn test_long_side_effect_chain_evaluates_once() {
    let probe = Probe::new();
    let fired = Probe::new();
    when(probe.condition(false))
        .is_true_run(fired.action())
        .is_true_run(fired.action())
        .is_exception(fired.action())
        .is_false_run(fired.action())
        .is_false_run(fired.action());
    assert_eq!(probe.calls(), 1);
    assert_eq!(fired.calls(), 1);
}

#[test]
fn test_evaluation_happens_at_first_branch() {
    let probe = Probe::new();
    let chain = when_with(|n: &i32| {
        probe.hit();
        *n < 0
    }, -1);
    assert_eq!(probe.calls(), 0);
    let chain = chain.is_false_run(|| {});
    assert_eq!(probe.calls(), 1);
    assert_eq!(chain.state(), ConditionState::True);
}
