//! Value slot of a chain
//!
//! A chain starts out [`NoValue`]. The first value-producing branch
//! (`is_true(value)`, `is_true_compute`, `is_true_map`, ...) fixes the value
//! type and turns the slot into [`Valued<R>`]. Every later value-producing
//! branch on the same chain must produce the same `R`.
//!
//! The slot carries no runtime behavior beyond holding the winning value.

/// Slot of a chain that has not named a value type yet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoValue;

/// Slot of a chain producing values of type `R`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valued<R>(Option<R>);

impl<R> Valued<R> {
    pub(crate) fn new(value: Option<R>) -> Self {
        Valued(value)
    }

    /// The stored value, if a value branch fired
    pub fn get(&self) -> Option<&R> {
        self.0.as_ref()
    }

    /// Take the stored value
    pub fn into_inner(self) -> Option<R> {
        self.0
    }
}

/// A slot that can be re-typed to hold values of type `R`
///
/// Implemented by [`NoValue`] for every `R` and by [`Valued<R>`] for its own
/// `R` only.
pub trait ValueSlot<R> {
    /// Move the stored value (if any) into the `R`-typed slot
    fn into_value(self) -> Option<R>;
}

impl<R> ValueSlot<R> for NoValue {
    fn into_value(self) -> Option<R> {
        None
    }
}

impl<R> ValueSlot<R> for Valued<R> {
    fn into_value(self) -> Option<R> {
        self.0
    }
}

/// Settle a slot after a value-producing branch ran (or did not)
pub(crate) fn settle<S, R>(slot: S, produced: Option<R>) -> Valued<R>
where
    S: ValueSlot<R>,
{
    match produced {
        Some(value) => Valued::new(Some(value)),
        None => Valued::new(slot.into_value()),
    }
}
