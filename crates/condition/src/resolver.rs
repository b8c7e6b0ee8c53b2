//! Resolve-once state machine shared by every chain type
//!
//! The resolver owns the condition and its memoized state. Chain types only
//! tell it which outcome a branch waits for and how to run the condition;
//! the resolver decides whether the branch fires.
//!
//! ## Rules
//!
//! 1. The condition runs at most once, on the first branch of the chain.
//! 2. A failing condition is captured and becomes `Exception`; it is not
//!    returned to the caller.
//! 3. The first branch whose expected outcome matches wins and moves the
//!    state to `Resolved`. Every later branch is a no-op.

use lazycheck_core::{
    require_non_null_msg, CheckOptions, ConditionFailure, ConditionState, NullCheck, Outcome,
    Result,
};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, trace};

pub(crate) struct Resolver<C> {
    /// Taken on evaluation; `None` afterwards
    condition: Option<C>,
    state: ConditionState,
    failure: Option<ConditionFailure>,
    options: CheckOptions,
}

impl<C> Resolver<C> {
    pub(crate) fn new(condition: C, options: CheckOptions) -> Self {
        Resolver {
            condition: Some(condition),
            state: ConditionState::Unevaluated,
            failure: None,
            options,
        }
    }

    pub(crate) fn state(&self) -> ConditionState {
        self.state
    }

    pub(crate) fn failure(&self) -> Option<&ConditionFailure> {
        self.failure.as_ref()
    }

    pub(crate) fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// The captured failure, if no branch consumed it
    pub(crate) fn into_unhandled(self) -> Option<ConditionFailure> {
        match self.state {
            ConditionState::Exception => self.failure,
            _ => None,
        }
    }

    /// Run the condition if it has not run yet and return the memoized state
    pub(crate) fn evaluate_once<E>(&mut self, evaluate: E) -> ConditionState
    where
        E: FnOnce(C) -> std::result::Result<bool, ConditionFailure>,
    {
        if !self.state.is_unevaluated() {
            return self.state;
        }
        let Some(condition) = self.condition.take() else {
            return self.state;
        };

        let verdict = if self.options.catch_panics {
            panic::catch_unwind(AssertUnwindSafe(|| evaluate(condition)))
                .unwrap_or_else(|payload| Err(ConditionFailure::from_panic(payload)))
        } else {
            evaluate(condition)
        };

        self.state = match verdict {
            Ok(verdict) => ConditionState::from(Outcome::from(verdict)),
            Err(failure) => {
                debug!(
                    origin = ?failure.origin(),
                    error = %failure,
                    "Condition failed; routing to exception branch"
                );
                self.failure = Some(failure);
                ConditionState::Exception
            }
        };
        trace!(state = %self.state, "Condition evaluated");
        self.state
    }

    /// Decide whether a branch waiting for `expected` fires now
    ///
    /// Returns `true` exactly once per chain; the state is `Resolved`
    /// afterwards.
    pub(crate) fn try_resolve<E>(&mut self, expected: Outcome, evaluate: E) -> bool
    where
        E: FnOnce(C) -> std::result::Result<bool, ConditionFailure>,
    {
        if self.state.is_resolved() {
            return false;
        }
        if !self.evaluate_once(evaluate).matches(expected) {
            return false;
        }
        self.state = ConditionState::Resolved;
        trace!(branch = %expected, "Branch fired; chain resolved");
        true
    }

    /// Like [`Resolver::try_resolve`] for a callback that may be missing
    ///
    /// Returns the callback when the branch fires, `None` when it does not,
    /// and an error when a missing callback is rejected under the configured
    /// [`NullCheck`] policy.
    pub(crate) fn claim<T, E>(
        &mut self,
        callback: Option<T>,
        what: &'static str,
        expected: Outcome,
        evaluate: E,
    ) -> Result<Option<T>>
    where
        E: FnOnce(C) -> std::result::Result<bool, ConditionFailure>,
    {
        if self.state.is_resolved() {
            return Ok(None);
        }
        match self.options.null_check {
            NullCheck::WhileUnresolved => {
                let callback = require_callback(callback, what, expected)?;
                Ok(self.try_resolve(expected, evaluate).then_some(callback))
            }
            NullCheck::OnFire => {
                if self.try_resolve(expected, evaluate) {
                    require_callback(callback, what, expected).map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }
}

fn require_callback<T>(callback: Option<T>, what: &'static str, expected: Outcome) -> Result<T> {
    if callback.is_none() {
        debug!(callback = what, branch = %expected, "Rejected null callback");
    }
    require_non_null_msg(callback, format!("{} must not be null", what))
}
