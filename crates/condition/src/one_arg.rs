//! Chains over a predicate and a captured argument
//!
//! The argument is bound at construction. The predicate sees it by
//! reference, and so does every argument-aware branch (`*_accept`, `*_map`).

use crate::resolver::Resolver;
use crate::slot::{settle, NoValue, ValueSlot, Valued};
use lazycheck_core::{
    CheckError, CheckOptions, ConditionFailure, ConditionState, Outcome, Result, Verdict,
};
use std::fmt;

/// A lazy chain over a predicate applied to a captured argument
///
/// ```ignore
/// let shown = when_with(|name: &String| name.is_empty(), name)
///     .is_true_compute(|| "anonymous".to_string())
///     .is_false_map(|name| name.to_uppercase())
///     .value();
/// ```
///
/// Evaluation, memoization and first-match-wins follow the same rules as
/// [`NoArgCheckResult`](crate::NoArgCheckResult), including the silent
/// absorption of condition failures when no exception branch is chained.
pub struct OneArgCheckResult<A, P, S = NoValue> {
    resolver: Resolver<P>,
    argument: A,
    slot: S,
}

impl<A, P> OneArgCheckResult<A, P, NoValue> {
    pub(crate) fn new(predicate: P, argument: A, options: CheckOptions) -> Self {
        OneArgCheckResult {
            resolver: Resolver::new(predicate, options),
            argument,
            slot: NoValue,
        }
    }

    /// Finish a chain that produces no value
    ///
    /// Returns [`CheckError::UnhandledFailure`] if the predicate failed and no
    /// exception branch fired.
    pub fn into_result(self) -> Result<()> {
        match self.resolver.into_unhandled() {
            Some(failure) => Err(CheckError::UnhandledFailure(failure)),
            None => Ok(()),
        }
    }
}

impl<A, P, S> OneArgCheckResult<A, P, S> {
    /// Current state of the chain
    pub fn state(&self) -> ConditionState {
        self.resolver.state()
    }

    /// Check if a branch already fired
    pub fn is_resolved(&self) -> bool {
        self.state().is_resolved()
    }

    /// The failure captured while evaluating the predicate, if any
    pub fn failure(&self) -> Option<&ConditionFailure> {
        self.resolver.failure()
    }

    /// Options this chain was built with
    pub fn options(&self) -> &CheckOptions {
        self.resolver.options()
    }

    /// The captured argument
    pub fn argument(&self) -> &A {
        &self.argument
    }

    /// Give the captured argument back, dropping the chain
    pub fn into_argument(self) -> A {
        self.argument
    }
}

impl<A, P, V, S> OneArgCheckResult<A, P, S>
where
    P: FnOnce(&A) -> V,
    V: Verdict,
{
    fn fire(&mut self, expected: Outcome) -> bool {
        let argument = &self.argument;
        self.resolver
            .try_resolve(expected, |predicate| predicate(argument).into_verdict())
    }

    fn claim<T>(
        &mut self,
        callback: Option<T>,
        what: &'static str,
        expected: Outcome,
    ) -> Result<Option<T>> {
        let argument = &self.argument;
        self.resolver.claim(callback, what, expected, |predicate| {
            predicate(argument).into_verdict()
        })
    }

    fn settle<R>(self, produced: Option<R>) -> OneArgCheckResult<A, P, Valued<R>>
    where
        S: ValueSlot<R>,
    {
        OneArgCheckResult {
            resolver: self.resolver,
            argument: self.argument,
            slot: settle(self.slot, produced),
        }
    }

    /// Record `value` if the predicate holds
    pub fn is_true<R>(mut self, value: R) -> OneArgCheckResult<A, P, Valued<R>>
    where
        S: ValueSlot<R>,
    {
        let fired = self.fire(Outcome::True);
        self.settle(fired.then_some(value))
    }

    /// Record `value` if the predicate does not hold
    pub fn is_false<R>(mut self, value: R) -> OneArgCheckResult<A, P, Valued<R>>
    where
        S: ValueSlot<R>,
    {
        let fired = self.fire(Outcome::False);
        self.settle(fired.then_some(value))
    }

    /// Run `action` if the predicate holds
    pub fn is_true_run<F>(mut self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.fire(Outcome::True) {
            action();
        }
        self
    }

    /// Run `action` if the predicate does not hold
    pub fn is_false_run<F>(mut self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.fire(Outcome::False) {
            action();
        }
        self
    }

    /// Run `action` if the predicate failed
    pub fn is_exception<F>(mut self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.fire(Outcome::Exception) {
            action();
        }
        self
    }

    /// Pass the argument to `consumer` if the predicate holds
    pub fn is_true_accept<F>(mut self, consumer: F) -> Self
    where
        F: FnOnce(&A),
    {
        if self.fire(Outcome::True) {
            consumer(&self.argument);
        }
        self
    }

    /// Pass the argument to `consumer` if the predicate does not hold
    pub fn is_false_accept<F>(mut self, consumer: F) -> Self
    where
        F: FnOnce(&A),
    {
        if self.fire(Outcome::False) {
            consumer(&self.argument);
        }
        self
    }

    /// Produce the chain's value with `producer` if the predicate holds
    pub fn is_true_compute<R, F>(mut self, producer: F) -> OneArgCheckResult<A, P, Valued<R>>
    where
        F: FnOnce() -> R,
        S: ValueSlot<R>,
    {
        let produced = self.fire(Outcome::True).then(producer);
        self.settle(produced)
    }

    /// Produce the chain's value with `producer` if the predicate does not
    /// hold
    pub fn is_false_compute<R, F>(mut self, producer: F) -> OneArgCheckResult<A, P, Valued<R>>
    where
        F: FnOnce() -> R,
        S: ValueSlot<R>,
    {
        let produced = self.fire(Outcome::False).then(producer);
        self.settle(produced)
    }

    /// Map the argument into the chain's value if the predicate holds
    pub fn is_true_map<R, F>(mut self, mapper: F) -> OneArgCheckResult<A, P, Valued<R>>
    where
        F: FnOnce(&A) -> R,
        S: ValueSlot<R>,
    {
        let produced = if self.fire(Outcome::True) {
            Some(mapper(&self.argument))
        } else {
            None
        };
        self.settle(produced)
    }

    /// Map the argument into the chain's value if the predicate does not hold
    pub fn is_false_map<R, F>(mut self, mapper: F) -> OneArgCheckResult<A, P, Valued<R>>
    where
        F: FnOnce(&A) -> R,
        S: ValueSlot<R>,
    {
        let produced = if self.fire(Outcome::False) {
            Some(mapper(&self.argument))
        } else {
            None
        };
        self.settle(produced)
    }

    /// [`is_true_run`](Self::is_true_run) with an action that may be `None`
    pub fn try_is_true_run<F>(mut self, action: Option<F>) -> Result<Self>
    where
        F: FnOnce(),
    {
        if let Some(action) = self.claim(action, "action", Outcome::True)? {
            action();
        }
        Ok(self)
    }

    /// [`is_false_run`](Self::is_false_run) with an action that may be `None`
    pub fn try_is_false_run<F>(mut self, action: Option<F>) -> Result<Self>
    where
        F: FnOnce(),
    {
        if let Some(action) = self.claim(action, "action", Outcome::False)? {
            action();
        }
        Ok(self)
    }

    /// [`is_exception`](Self::is_exception) with an action that may be `None`
    pub fn try_is_exception<F>(mut self, action: Option<F>) -> Result<Self>
    where
        F: FnOnce(),
    {
        if let Some(action) = self.claim(action, "action", Outcome::Exception)? {
            action();
        }
        Ok(self)
    }

    /// [`is_true_accept`](Self::is_true_accept) with a consumer that may be
    /// `None`
    pub fn try_is_true_accept<F>(mut self, consumer: Option<F>) -> Result<Self>
    where
        F: FnOnce(&A),
    {
        if let Some(consumer) = self.claim(consumer, "consumer", Outcome::True)? {
            consumer(&self.argument);
        }
        Ok(self)
    }

    /// [`is_false_accept`](Self::is_false_accept) with a consumer that may be
    /// `None`
    pub fn try_is_false_accept<F>(mut self, consumer: Option<F>) -> Result<Self>
    where
        F: FnOnce(&A),
    {
        if let Some(consumer) = self.claim(consumer, "consumer", Outcome::False)? {
            consumer(&self.argument);
        }
        Ok(self)
    }

    /// [`is_true_compute`](Self::is_true_compute) with a producer that may be
    /// `None`
    pub fn try_is_true_compute<R, F>(
        mut self,
        producer: Option<F>,
    ) -> Result<OneArgCheckResult<A, P, Valued<R>>>
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
    ) -> Result<OneArgCheckResult<A, P, Valued<R>>>
    where
        F: FnOnce() -> R,
        S: ValueSlot<R>,
    {
        let produced = self
            .claim(producer, "producer", Outcome::False)?
            .map(|producer| producer());
        Ok(self.settle(produced))
    }

    /// [`is_true_map`](Self::is_true_map) with a mapper that may be `None`
    pub fn try_is_true_map<R, F>(
        mut self,
        mapper: Option<F>,
    ) -> Result<OneArgCheckResult<A, P, Valued<R>>>
    where
        F: FnOnce(&A) -> R,
        S: ValueSlot<R>,
    {
        let produced = self
            .claim(mapper, "mapper", Outcome::True)?
            .map(|mapper| mapper(&self.argument));
        Ok(self.settle(produced))
    }

    /// [`is_false_map`](Self::is_false_map) with a mapper that may be `None`
    pub fn try_is_false_map<R, F>(
        mut self,
        mapper: Option<F>,
    ) -> Result<OneArgCheckResult<A, P, Valued<R>>>
    where
        F: FnOnce(&A) -> R,
        S: ValueSlot<R>,
    {
        let produced = self
            .claim(mapper, "mapper", Outcome::False)?
            .map(|mapper| mapper(&self.argument));
        Ok(self.settle(produced))
    }
}

impl<A, P, R> OneArgCheckResult<A, P, Valued<R>> {
    /// The value of the branch that fired, or `None` if no value branch fired
    pub fn value(self) -> Option<R> {
        self.slot.into_inner()
    }

    /// Borrow the value of the branch that fired
    pub fn value_ref(&self) -> Option<&R> {
        self.slot.get()
    }

    /// Finish the chain, surfacing an unhandled predicate failure
    pub fn into_result(self) -> Result<Option<R>> {
        match self.resolver.into_unhandled() {
            Some(failure) => Err(CheckError::UnhandledFailure(failure)),
            None => Ok(self.slot.into_inner()),
        }
    }
}

impl<A: fmt::Debug, P, S> fmt::Debug for OneArgCheckResult<A, P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneArgCheckResult")
            .field("state", &self.state())
            .field("argument", &self.argument)
            .field("failure", &self.failure())
            .finish_non_exhaustive()
    }
}
