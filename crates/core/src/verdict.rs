//! What a condition may return
//!
//! A condition produces a [`Verdict`]: a plain `bool`, an `Option<bool>`
//! (where `None` counts as a failure) or a `Result<bool, E>`.

use crate::error::{BoxError, ConditionFailure};

/// Conversion from a condition's return value into a verdict or a failure
pub trait Verdict {
    /// Resolve into `Ok(verdict)` or the failure that replaced it
    fn into_verdict(self) -> Result<bool, ConditionFailure>;
}

impl Verdict for bool {
    fn into_verdict(self) -> Result<bool, ConditionFailure> {
        Ok(self)
    }
}

impl Verdict for Option<bool> {
    fn into_verdict(self) -> Result<bool, ConditionFailure> {
        self.ok_or_else(|| ConditionFailure::msg("condition produced no verdict"))
    }
}

impl<E> Verdict for Result<bool, E>
where
    E: Into<BoxError>,
{
    fn into_verdict(self) -> Result<bool, ConditionFailure> {
        self.map_err(ConditionFailure::from_source)
    }
}
