//! Per-signal reaction builder: transitions and actions.

use crate::builder::define::StateBuilder;
use crate::core::state::TransitionRecord;
use crate::core::{Guard, SignalSpace, StateSpace};

/// Binds one signal on one state to a transition, a guarded transition, or
/// an action.
///
/// Returned by [`StateBuilder::on_signal`]. Each terminal call hands the
/// state builder back so further signals can be chained.
#[must_use = "a bound signal does nothing until go_to, go_to_if, or act is called"]
pub struct SignalBinder<'m, A, S: StateSpace, G: SignalSpace> {
    state: StateBuilder<'m, A, S, G>,
    key: usize,
}

impl<'m, A, S: StateSpace, G: SignalSpace> SignalBinder<'m, A, S, G> {
    pub(crate) fn new(state: StateBuilder<'m, A, S, G>, key: usize) -> Self {
        SignalBinder { state, key }
    }

    /// Transition unconditionally to `destination`, replacing any earlier
    /// transition registered for the same signal on this state.
    pub fn go_to(self, destination: S) -> StateBuilder<'m, A, S, G> {
        self.state.machine.node_mut(self.state.ordinal).put_transition(
            self.key,
            TransitionRecord {
                destination: destination.ordinal(),
                guard: None,
            },
        );
        self.state
    }

    /// Transition to `destination` only while `guard` holds.
    ///
    /// A rejecting guard still claims the signal for this state; it is not
    /// offered to the parent. Any action registered for the same signal runs
    /// whether or not the guard permits the move.
    pub fn go_to_if<F>(self, destination: S, guard: F) -> StateBuilder<'m, A, S, G>
    where
        F: Fn(&A) -> bool + 'static,
    {
        self.state.machine.node_mut(self.state.ordinal).put_transition(
            self.key,
            TransitionRecord {
                destination: destination.ordinal(),
                guard: Some(Guard::new(guard)),
            },
        );
        self.state
    }

    /// Run `action` when the signal arrives, without changing state.
    ///
    /// An action may coexist with a transition for the same signal; the
    /// action always runs first.
    pub fn act<F>(self, action: F) -> StateBuilder<'m, A, S, G>
    where
        F: Fn(&mut A) + 'static,
    {
        self.state
            .machine
            .node_mut(self.state.ordinal)
            .put_action(self.key, Box::new(action));
        self.state
    }
}
