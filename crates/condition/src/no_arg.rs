//! Chains over a zero-argument condition
//!
//! Created by [`when`](crate::when) / [`in_case`](crate::in_case) and their
//! boolean-literal forms.

use crate::resolver::Resolver;
use crate::slot::{settle, NoValue, ValueSlot, Valued};
use lazycheck_core::{
    CheckError, CheckOptions, ConditionFailure, ConditionState, Outcome, Result, Verdict,
};
use std::fmt;

/// A lazy chain over a zero-argument condition
///
/// Every branch method consumes the chain and hands it back, so a chain reads
/// as a single expression:
///
/// ```ignore
/// let label = when(|| stock > 0)
///     .is_true("in stock")
///     .is_false("sold out")
///     .value();
/// ```
///
/// The condition runs at most once, on the first branch call. The first
/// branch whose outcome matches fires; all later branches are no-ops.
///
/// # Condition failures are absorbed
///
/// If the condition fails (returns `Err`, returns `None`, or panics with
/// panic capture enabled), the failure is stored and the chain moves to
/// [`ConditionState::Exception`]. It is **not** returned to the caller.
/// Without an [`is_exception`](Self::is_exception) branch the failure is only
/// visible as "no branch fired". Use [`failure`](Self::failure) or
/// `into_result` to surface it.
///
/// # Callback failures propagate
///
/// Panics inside branch callbacks are never caught.
pub struct NoArgCheckResult<C, S = NoValue> {
    resolver: Resolver<C>,
    slot: S,
}

impl<C> NoArgCheckResult<C, NoValue> {
    pub(crate) fn new(condition: C, options: CheckOptions) -> Self {
        NoArgCheckResult {
            resolver: Resolver::new(condition, options),
            slot: NoValue,
        }
    }

    /// Finish a chain that produces no value
    ///
    /// Returns [`CheckError::UnhandledFailure`] if the condition failed and no
    /// exception branch fired.
    pub fn into_result(self) -> Result<()> {
        match self.resolver.into_unhandled() {
            Some(failure) => Err(CheckError::UnhandledFailure(failure)),
            None => Ok(()),
        }
    }
}

impl<C, S> NoArgCheckResult<C, S> {
    /// Current state of the chain
    pub fn state(&self) -> ConditionState {
        self.resolver.state()
    }

    /// Check if a branch already fired
    pub fn is_resolved(&self) -> bool {
        self.state().is_resolved()
    }

    /// The failure captured while evaluating the condition, if any
    ///
    /// Stays available after an exception branch handled it.
    pub fn failure(&self) -> Option<&ConditionFailure> {
        self.resolver.failure()
    }

    /// Options this chain was built with
    pub fn options(&self) -> &CheckOptions {
        self.resolver.options()
    }
}

impl<C, V, S> NoArgCheckResult<C, S>
where
    C: FnOnce() -> V,
    V: Verdict,
{
    fn fire(&mut self, expected: Outcome) -> bool {
        self.resolver
            .try_resolve(expected, |condition| condition().into_verdict())
    }

    fn claim<T>(
        &mut self,
        callback: Option<T>,
        what: &'static str,
        expected: Outcome,
    ) -> Result<Option<T>> {
        self.resolver
            .claim(callback, what, expected, |condition| condition().into_verdict())
    }

    fn settle<R>(self, produced: Option<R>) -> NoArgCheckResult<C, Valued<R>>
    where
        S: ValueSlot<R>,
    {
        NoArgCheckResult {
            resolver: self.resolver,
            slot: settle(self.slot, produced),
        }
    }

    /// Record `value` if the condition is true
    pub fn is_true<R>(mut self, value: R) -> NoArgCheckResult<C, Valued<R>>
    where
        S: ValueSlot<R>,
    {
        let fired = self.fire(Outcome::True);
        self.settle(fired.then_some(value))
    }

    /// Record `value` if the condition is false
    pub fn is_false<R>(mut self, value: R) -> NoArgCheckResult<C, Valued<R>>
    where
        S: ValueSlot<R>,
    {
        let fired = self.fire(Outcome::False);
        self.settle(fired.then_some(value))
    }

    /// Run `action` if the condition is true
    pub fn is_true_run<F>(mut self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.fire(Outcome::True) {
            action();
        }
        self
    }

    /// Run `action` if the condition is false
    pub fn is_false_run<F>(mut self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.fire(Outcome::False) {
            action();
        }
        self
    }

    /// Run `action` if the condition failed
    pub fn is_exception<F>(mut self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.fire(Outcome::Exception) {
            action();
        }
        self
    }

    /// Produce the chain's value with `producer` if the condition is true
    pub fn is_true_compute<R, F>(mut self, producer: F) -> NoArgCheckResult<C, Valued<R>>
    where
        F: FnOnce() -> R,
        S: ValueSlot<R>,
    {
        let produced = self.fire(Outcome::True).then(producer);
        self.settle(produced)
    }

    /// Produce the chain's value with `producer` if the condition is false
    pub fn is_false_compute<R, F>(mut self, producer: F) -> NoArgCheckResult<C, Valued<R>>
    where
        F: FnOnce() -> R,
        S: ValueSlot<R>,
    {
        let produced = self.fire(Outcome::False).then(producer);
        self.settle(produced)
    }

    /// [`is_true_run`](Self::is_true_run) with a callback that may be `None`
    ///
    /// A `None` action fails with [`CheckError::NullArgument`]; when it fails
    /// depends on [`CheckOptions::null_check`].
    pub fn try_is_true_run<F>(mut self, action: Option<F>) -> Result<Self>
    where
        F: FnOnce(),
    {
        if let Some(action) = self.claim(action, "action", Outcome::True)? {
            action();
        }
        Ok(self)
    }

    /// [`is_false_run`](Self::is_false_run) with a callback that may be `None`
    pub fn try_is_false_run<F>(mut self, action: Option<F>) -> Result<Self>
    where
        F: FnOnce(),
    {
        if let Some(action) = self.claim(action, "action", Outcome::False)? {
            action();
        }
        Ok(self)
    }

    /// [`is_exception`](Self::is_exception) with a callback that may be `None`
    pub fn try_is_exception<F>(mut self, action: Option<F>) -> Result<Self>
    where
        F: FnOnce(),
    {
        if let Some(action) = self.claim(action, "action", Outcome::Exception)? {
            action();
        }
        Ok(self)
    }

    /// [`is_true_compute`](Self::is_true_compute) with a producer that may be
    /// `None`
    pub fn try_is_true_compute<R, F>(
        mut self,
        producer: Option<F>,
    ) -> Result<NoArgCheckResult<C, Valued<R>>>
    where
        F: FnOnce() -> R,
        S: ValueSlot<R>,
    {
        let produced = self
            .claim(producer, "producer", Outcome::True)?
            .map(|producer| producer());
        Ok(self.settle(produced))
    }

    /// [`is_false_compute`](Self::is_false_compute) with a producer that may
    /// be `None`
    pub fn try_is_false_compute<R, F>(
        mut self,
        producer: Option<F>,
    ) -> Result<NoArgCheckResult<C, Valued<R>>>
    where
        F: FnOnce() -> R,
        S: ValueSlot<R>,
    {
        let produced = self
            .claim(producer, "producer", Outcome::False)?
            .map(|producer| producer());
        Ok(self.settle(produced))
    }
}

impl<C, R> NoArgCheckResult<C, Valued<R>> {
    /// The value of the branch that fired, or `None` if no value branch fired
    pub fn value(self) -> Option<R> {
        self.slot.into_inner()
    }

    /// Borrow the value of the branch that fired
    pub fn value_ref(&self) -> Option<&R> {
        self.slot.get()
    }

    /// Finish the chain, surfacing an unhandled condition failure
    ///
    /// Returns [`CheckError::UnhandledFailure`] if the condition failed and no
    /// exception branch fired, the value otherwise.
    pub fn into_result(self) -> Result<Option<R>> {
        match self.resolver.into_unhandled() {
            Some(failure) => Err(CheckError::UnhandledFailure(failure)),
            None => Ok(self.slot.into_inner()),
        }
    }
}

impl<C, S> fmt::Debug for NoArgCheckResult<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoArgCheckResult")
            .field("state", &self.state())
            .field("failure", &self.failure())
            .finish_non_exhaustive()
    }
}
