//! Fluent state definition: parent declaration first, then hooks and signal
//! handlers.

use tracing::warn;

use crate::builder::error::BuildError;
use crate::builder::signal::SignalBinder;
use crate::core::state::ParentLink;
use crate::core::{Machine, SignalSpace, StateSpace};

/// First stage of defining a state: the parent declaration.
///
/// Returned by [`Machine::define_state`]. No hooks or signal handlers can be
/// attached until the state has either adopted a parent or affirmed that it
/// is a root.
#[must_use = "a defined state must declare a parent or affirm it has none"]
pub struct ParentBinder<'m, A, S: StateSpace, G: SignalSpace> {
    machine: &'m mut Machine<A, S, G>,
    ordinal: usize,
}

impl<'m, A, S: StateSpace, G: SignalSpace> ParentBinder<'m, A, S, G> {
    pub(crate) fn new(machine: &'m mut Machine<A, S, G>, ordinal: usize) -> Self {
        ParentBinder { machine, ordinal }
    }

    /// Adopts `parent`, refusing declarations that would close a cycle in
    /// the hierarchy.
    pub fn parent(self, parent: S) -> Result<StateBuilder<'m, A, S, G>, BuildError> {
        let parent_ordinal = parent.ordinal();
        if self.machine.is_ancestor_of(self.ordinal, parent_ordinal) {
            let state = S::from_ordinal(self.ordinal).name();
            warn!(
                state,
                parent = parent.name(),
                "cyclic parent declaration rejected"
            );
            return Err(BuildError::CyclicParentage {
                state,
                parent: parent.name(),
            });
        }
        self.machine
            .node_mut(self.ordinal)
            .set_parent(ParentLink::Child(parent_ordinal));
        Ok(StateBuilder {
            machine: self.machine,
            ordinal: self.ordinal,
        })
    }

    /// Affirms that the state is a root of its tree.
    pub fn no_parent(self) -> StateBuilder<'m, A, S, G> {
        self.machine
            .node_mut(self.ordinal)
            .set_parent(ParentLink::Root);
        StateBuilder {
            machine: self.machine,
            ordinal: self.ordinal,
        }
    }
}

/// Second stage of defining a state: hooks and signal handlers, chainable in
/// any order.
pub struct StateBuilder<'m, A, S: StateSpace, G: SignalSpace> {
    pub(crate) machine: &'m mut Machine<A, S, G>,
    pub(crate) ordinal: usize,
}

impl<'m, A, S: StateSpace, G: SignalSpace> std::fmt::Debug for StateBuilder<'m, A, S, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateBuilder")
            .field("ordinal", &self.ordinal)
            .finish_non_exhaustive()
    }
}

impl<'m, A, S: StateSpace, G: SignalSpace> StateBuilder<'m, A, S, G> {
    /// Binds the hook fired when the state is entered.
    pub fn on_enter<F>(self, hook: F) -> Self
    where
        F: Fn(&mut A) + 'static,
    {
        self.machine
            .node_mut(self.ordinal)
            .set_on_enter(Box::new(hook));
        self
    }

    /// Binds the hook fired on every tick while the state is active. States
    /// without one delegate ticking to their parent.
    pub fn on_tick<F>(self, hook: F) -> Self
    where
        F: Fn(&mut A) + 'static,
    {
        self.machine
            .node_mut(self.ordinal)
            .set_on_tick(Box::new(hook));
        self
    }

    /// Binds the hook fired when the state is exited.
    pub fn on_exit<F>(self, hook: F) -> Self
    where
        F: Fn(&mut A) + 'static,
    {
        self.machine
            .node_mut(self.ordinal)
            .set_on_exit(Box::new(hook));
        self
    }

    /// Starts describing how this state reacts to `signal`.
    pub fn on_signal(self, signal: G) -> SignalBinder<'m, A, S, G> {
        SignalBinder::new(self, signal.ordinal())
    }
}
