//! Entry points for condition chains
//!
//! Two equivalent name families exist, `when*` and `in_case*`, each over three
//! input shapes:
//!
//! | Input | Infallible | Takes `Option`, fails on `None` |
//! |-------|------------|---------------------------------|
//! | closure | `when` / `in_case` | `try_when` / `try_in_case` |
//! | boolean | `when_value` / `in_case_value` | `try_when_value` / `try_in_case_value` |
//! | predicate + argument | `when_with` / `in_case_with` | `try_when_with` / `try_in_case_with` |
//!
//! The free functions use [`CheckOptions::default`]. Use [`CheckBuilder`] to
//! build chains with other options.

use crate::no_arg::NoArgCheckResult;
use crate::one_arg::OneArgCheckResult;
use lazycheck_core::{require_non_null_msg, CheckOptions, NullCheck, Result, Verdict};
use tracing::trace;

/// Factory for condition chains sharing one set of options
///
/// ```ignore
/// use lazycheck_condition::CheckBuilder;
/// use lazycheck_core::NullCheck;
///
/// let checks = CheckBuilder::new()
///     .null_check(NullCheck::WhileUnresolved)
///     .catch_panics(true);
///
/// let parsed = checks
///     .when_with(|s: &String| s.parse::<bool>(), input)
///     .is_true("yes")
///     .is_false("no")
///     .value();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckBuilder {
    options: CheckOptions,
}

impl CheckBuilder {
    /// Builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with the given options
    pub fn with_options(options: CheckOptions) -> Self {
        CheckBuilder { options }
    }

    /// Set the null-callback validation timing
    pub fn null_check(mut self, null_check: NullCheck) -> Self {
        self.options = self.options.null_check(null_check);
        self
    }

    /// Enable or disable panic capture for conditions
    pub fn catch_panics(mut self, catch_panics: bool) -> Self {
        self.options = self.options.catch_panics(catch_panics);
        self
    }

    /// Options used for every chain built here
    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Chain over a zero-argument condition
    pub fn in_case<C, V>(&self, condition: C) -> NoArgCheckResult<C>
    where
        C: FnOnce() -> V,
        V: Verdict,
    {
        trace!(kind = "no_arg", "Building condition chain");
        NoArgCheckResult::new(condition, self.options)
    }

    /// Chain over a boolean that is already known
    pub fn in_case_value(&self, flag: bool) -> NoArgCheckResult<impl FnOnce() -> bool> {
        self.in_case(move || flag)
    }

    /// Chain over `predicate` applied to `argument`
    pub fn in_case_with<A, P, V>(&self, predicate: P, argument: A) -> OneArgCheckResult<A, P>
    where
        P: FnOnce(&A) -> V,
        V: Verdict,
    {
        trace!(kind = "one_arg", "Building condition chain");
        OneArgCheckResult::new(predicate, argument, self.options)
    }

    /// Chain over a condition that may be missing
    ///
    /// Fails immediately with a null-argument error if `condition` is `None`.
    pub fn try_in_case<C, V>(&self, condition: Option<C>) -> Result<NoArgCheckResult<C>>
    where
        C: FnOnce() -> V,
        V: Verdict,
    {
        let condition = require_non_null_msg(condition, "condition must not be null")?;
        Ok(self.in_case(condition))
    }

    /// Chain over a boolean that may be missing
    pub fn try_in_case_value(
        &self,
        flag: Option<bool>,
    ) -> Result<NoArgCheckResult<impl FnOnce() -> bool>> {
        let flag = require_non_null_msg(flag, "condition must not be null")?;
        Ok(self.in_case_value(flag))
    }

    /// Chain over a predicate and argument that may be missing
    ///
    /// The predicate is checked first, then the argument.
    pub fn try_in_case_with<A, P, V>(
        &self,
        predicate: Option<P>,
        argument: Option<A>,
    ) -> Result<OneArgCheckResult<A, P>>
    where
        P: FnOnce(&A) -> V,
        V: Verdict,
    {
        let predicate = require_non_null_msg(predicate, "predicate must not be null")?;
        let argument = require_non_null_msg(argument, "argument must not be null")?;
        Ok(self.in_case_with(predicate, argument))
    }

    /// Same as [`in_case`](Self::in_case)
    pub fn when<C, V>(&self, condition: C) -> NoArgCheckResult<C>
    where
        C: FnOnce() -> V,
        V: Verdict,
    {
        self.in_case(condition)
    }

    /// Same as [`in_case_value`](Self::in_case_value)
    pub fn when_value(&self, flag: bool) -> NoArgCheckResult<impl FnOnce() -> bool> {
        self.in_case_value(flag)
    }

    /// Same as [`in_case_with`](Self::in_case_with)
    pub fn when_with<A, P, V>(&self, predicate: P, argument: A) -> OneArgCheckResult<A, P>
    where
        P: FnOnce(&A) -> V,
        V: Verdict,
    {
        self.in_case_with(predicate, argument)
    }

    /// Same as [`try_in_case`](Self::try_in_case)
    pub fn try_when<C, V>(&self, condition: Option<C>) -> Result<NoArgCheckResult<C>>
    where
        C: FnOnce() -> V,
        V: Verdict,
    {
        self.try_in_case(condition)
    }

    /// Same as [`try_in_case_value`](Self::try_in_case_value)
    pub fn try_when_value(
        &self,
        flag: Option<bool>,
    ) -> Result<NoArgCheckResult<impl FnOnce() -> bool>> {
        self.try_in_case_value(flag)
    }

    /// Same as [`try_in_case_with`](Self::try_in_case_with)
    pub fn try_when_with<A, P, V>(
        &self,
        predicate: Option<P>,
        argument: Option<A>,
    ) -> Result<OneArgCheckResult<A, P>>
    where
        P: FnOnce(&A) -> V,
        V: Verdict,
    {
        self.try_in_case_with(predicate, argument)
    }
}

/// Chain over a zero-argument condition, default options
pub fn in_case<C, V>(condition: C) -> NoArgCheckResult<C>
where
    C: FnOnce() -> V,
    V: Verdict,
{
    CheckBuilder::new().in_case(condition)
}

/// Chain over a known boolean, default options
pub fn in_case_value(flag: bool) -> NoArgCheckResult<impl FnOnce() -> bool> {
    CheckBuilder::new().in_case_value(flag)
}

/// Chain over `predicate` applied to `argument`, default options
pub fn in_case_with<A, P, V>(predicate: P, argument: A) -> OneArgCheckResult<A, P>
where
    P: FnOnce(&A) -> V,
    V: Verdict,
{
    CheckBuilder::new().in_case_with(predicate, argument)
}

/// Chain over a condition that may be missing, default options
pub fn try_in_case<C, V>(condition: Option<C>) -> Result<NoArgCheckResult<C>>
where
    C: FnOnce() -> V,
    V: Verdict,
{
    CheckBuilder::new().try_in_case(condition)
}

/// Chain over a boolean that may be missing, default options
pub fn try_in_case_value(flag: Option<bool>) -> Result<NoArgCheckResult<impl FnOnce() -> bool>> {
    CheckBuilder::new().try_in_case_value(flag)
}

/// Chain over a predicate and argument that may be missing, default options
pub fn try_in_case_with<A, P, V>(
    predicate: Option<P>,
    argument: Option<A>,
) -> Result<OneArgCheckResult<A, P>>
where
    P: FnOnce(&A) -> V,
    V: Verdict,
{
    CheckBuilder::new().try_in_case_with(predicate, argument)
}

/// Same as [`in_case`]
pub fn when<C, V>(condition: C) -> NoArgCheckResult<C>
where
    C: FnOnce() -> V,
    V: Verdict,
{
    in_case(condition)
}

/// Same as [`in_case_value`]
pub fn when_value(flag: bool) -> NoArgCheckResult<impl FnOnce() -> bool> {
    in_case_value(flag)
}

/// Same as [`in_case_with`]
pub fn when_with<A, P, V>(predicate: P, argument: A) -> OneArgCheckResult<A, P>
where
    P: FnOnce(&A) -> V,
    V: Verdict,
{
    in_case_with(predicate, argument)
}

/// Same as [`try_in_case`]
pub fn try_when<C, V>(condition: Option<C>) -> Result<NoArgCheckResult<C>>
where
    C: FnOnce() -> V,
    V: Verdict,
{
    try_in_case(condition)
}

/// Same as [`try_in_case_value`]
pub fn try_when_value(flag: Option<bool>) -> Result<NoArgCheckResult<impl FnOnce() -> bool>> {
    try_in_case_value(flag)
}

/// Same as [`try_in_case_with`]
pub fn try_when_with<A, P, V>(
    predicate: Option<P>,
    argument: Option<A>,
) -> Result<OneArgCheckResult<A, P>>
where
    P: FnOnce(&A) -> V,
    V: Verdict,
{
    try_in_case_with(predicate, argument)
}
