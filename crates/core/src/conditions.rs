//! Reusable conditions and predicates

/// Predicate that returns its boolean argument unchanged
pub fn identity(flag: &bool) -> bool {
    *flag
}

/// Condition that always yields `flag`
pub fn constant(flag: bool) -> impl FnOnce() -> bool {
    move || flag
}

/// Negate a predicate
pub fn not<A, P>(predicate: P) -> impl FnOnce(&A) -> bool
where
    P: FnOnce(&A) -> bool,
{
    move |arg: &A| !predicate(arg)
}

/// Condition that always fails with `message`
pub fn failing(message: impl Into<String>) -> impl FnOnce() -> Result<bool, String> {
    let message = message.into();
    move || Err(message)
}
