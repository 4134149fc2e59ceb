//! Guard predicates for controlling state transitions.
//!
//! Guards are boolean functions over the actor that determine whether a
//! transition may fire. They are evaluated at dispatch time, after any action
//! registered for the same signal has already run.

/// Predicate over the actor that decides whether a transition may fire.
///
/// A rejecting guard suppresses only the state change; the signal still
/// counts as handled at that level and is not offered to the parent state.
/// Guards should be pure: deterministic and free of side effects.
///
/// # Example
///
/// ```rust
/// use substate::Guard;
///
/// struct Valve {
///     open: bool,
/// }
///
/// let only_while_open = Guard::new(|v: &Valve| v.open);
///
/// assert!(only_while_open.check(&Valve { open: true }));
/// assert!(!only_while_open.check(&Valve { open: false }));
/// ```
pub struct Guard<A> {
    predicate: Box<dyn Fn(&A) -> bool>,
}

impl<A> Guard<A> {
    /// Create a guard from a predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&A) -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check whether the guard allows the transition for this actor.
    pub fn check(&self, actor: &A) -> bool {
        (self.predicate)(actor)
    }
}
