//! Evaluation state of a lazy condition
//!
//! ## State Machine
//!
//! ```text
//!                 ┌──────► True ──────┐
//!                 │                   │
//! Unevaluated ────┼──────► False ─────┼────► Resolved
//!                 │                   │
//!                 └──────► Exception ─┘
//! ```
//!
//! - `Unevaluated`: the condition has not been run yet
//! - `True` / `False`: the condition ran and produced a verdict
//! - `Exception`: the condition failed; the failure is kept for inspection
//! - `Resolved`: a branch fired and fixed the chain's outcome (terminal)
//!
//! Once a state other than `Unevaluated` is reached the condition is never
//! invoked again.

use serde::{Deserialize, Serialize};

/// Memoized state of a condition and its chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionState {
    /// Condition not evaluated yet
    Unevaluated,
    /// Condition evaluated to `true`, no branch fired yet
    True,
    /// Condition evaluated to `false`, no branch fired yet
    False,
    /// Condition failed during evaluation, no branch fired yet
    Exception,
    /// A branch fired; every later branch is a no-op
    Resolved,
}

impl ConditionState {
    /// Check if the condition has not run yet
    pub fn is_unevaluated(&self) -> bool {
        matches!(self, ConditionState::Unevaluated)
    }

    /// Check if a branch already fired
    pub fn is_resolved(&self) -> bool {
        matches!(self, ConditionState::Resolved)
    }

    /// Check if the condition produced a verdict or failure that no branch
    /// has consumed yet
    pub fn is_pending(&self) -> bool {
        self.outcome().is_some()
    }

    /// The raw outcome carried by this state, if any
    ///
    /// `Unevaluated` and `Resolved` carry no outcome.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            ConditionState::True => Some(Outcome::True),
            ConditionState::False => Some(Outcome::False),
            ConditionState::Exception => Some(Outcome::Exception),
            ConditionState::Unevaluated | ConditionState::Resolved => None,
        }
    }

    /// Check if a branch expecting `expected` may fire in this state
    pub fn matches(&self, expected: Outcome) -> bool {
        self.outcome() == Some(expected)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionState::Unevaluated => "Unevaluated",
            ConditionState::True => "True",
            ConditionState::False => "False",
            ConditionState::Exception => "Exception",
            ConditionState::Resolved => "Resolved",
        }
    }
}

impl Default for ConditionState {
    fn default() -> Self {
        ConditionState::Unevaluated
    }
}

impl std::fmt::Display for ConditionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The outcome a branch waits for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Condition evaluated to `true`
    True,
    /// Condition evaluated to `false`
    False,
    /// Condition failed
    Exception,
}

impl Outcome {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::True => "True",
            Outcome::False => "False",
            Outcome::Exception => "Exception",
        }
    }
}

impl From<bool> for Outcome {
    fn from(verdict: bool) -> Self {
        if verdict {
            Outcome::True
        } else {
            Outcome::False
        }
    }
}

impl From<Outcome> for ConditionState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::True => ConditionState::True,
            Outcome::False => ConditionState::False,
            Outcome::Exception => ConditionState::Exception,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
