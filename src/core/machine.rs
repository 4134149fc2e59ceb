//! The machine container: node storage, signal dispatch, and the transition
//! algorithm.

use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::builder::define::ParentBinder;
use crate::core::space::{SignalSpace, StateSpace};
use crate::core::state::{SignalDisposition, StateNode};

/// Observer invoked after every committed change of the active state,
/// including the initial one.
type StateObserver<A, S> = Box<dyn Fn(&mut A, S)>;

/// A hierarchical state machine bound to an actor.
///
/// The machine owns the actor and a dense arena of state nodes, one per id in
/// the [`StateSpace`]. Setup is fluent: [`Machine::define_state`] hands out a
/// builder per state, and [`Machine::conclude_setup`] (or
/// [`Machine::conclude_setup_with`]) fixes the initial state and runs its
/// entry cascade. From then on only the active state changes, always through
/// the transition algorithm.
///
/// There is deliberately no "current state" accessor: the actor observes
/// committed changes through the observer passed to `conclude_setup_with` and
/// tracks whatever it needs itself.
///
/// # Example
///
/// ```rust
/// use substate::{signal_space, state_space, Machine};
///
/// state_space! {
///     enum Lamp {
///         Off,
///         On,
///     }
/// }
///
/// signal_space! {
///     enum Switch {
///         Flip,
///     }
/// }
///
/// #[derive(Default)]
/// struct Room {
///     lamp: Option<Lamp>,
/// }
///
/// let mut hsm = Machine::<Room, Lamp, Switch>::new(Room::default());
/// hsm.define_state(Lamp::Off)
///     .no_parent()
///     .on_signal(Switch::Flip).go_to(Lamp::On);
/// hsm.define_state(Lamp::On)
///     .no_parent()
///     .on_signal(Switch::Flip).go_to(Lamp::Off);
/// hsm.conclude_setup_with(Lamp::Off, |room, lamp| room.lamp = Some(lamp));
///
/// hsm.signal(Switch::Flip);
/// assert_eq!(hsm.actor().lamp, Some(Lamp::On));
/// ```
pub struct Machine<A, S: StateSpace, G: SignalSpace> {
    actor: A,
    states: Box<[StateNode<A>]>,
    current: usize,
    observer: Option<StateObserver<A, S>>,
    _signals: PhantomData<G>,
}

impl<A, S: StateSpace, G: SignalSpace> Machine<A, S, G> {
    /// Creates a machine around the actor, with one node slot per state id.
    ///
    /// The active state starts at ordinal zero as a placeholder; nothing is
    /// entered until setup concludes.
    pub fn new(actor: A) -> Self {
        let states = (0..S::COUNT).map(|_| StateNode::new()).collect();
        Machine {
            actor,
            states,
            current: 0,
            observer: None,
            _signals: PhantomData,
        }
    }

    /// Starts defining one state.
    ///
    /// The returned binder insists on a parent declaration before any other
    /// configuration.
    pub fn define_state(&mut self, state: S) -> ParentBinder<'_, A, S, G> {
        ParentBinder::new(self, state.ordinal())
    }

    /// Ends the setup phase: fixes the initial state and runs its entry
    /// cascade from the outermost ancestor inward.
    pub fn conclude_setup(&mut self, initial: S) {
        self.finalize(initial);
    }

    /// Like [`Machine::conclude_setup`], but first registers an observer that
    /// is told about every committed state change, starting with `initial`.
    pub fn conclude_setup_with<F>(&mut self, initial: S, observer: F)
    where
        F: Fn(&mut A, S) + 'static,
    {
        self.observer = Some(Box::new(observer));
        self.finalize(initial);
    }

    /// Runs the active state's tick hook, delegating up the parent chain when
    /// a state has none bound. A chain without any hook ticks to nothing.
    pub fn tick(&mut self) {
        let mut level = self.current;
        loop {
            if self.states[level].tick(&mut self.actor) {
                return;
            }
            match self.states[level].parent() {
                Some(parent) => level = parent,
                None => return,
            }
        }
    }

    /// Delivers a signal to the active state, elevating it up the parent
    /// chain until some level claims it. Signals nobody claims are dropped.
    pub fn signal(&mut self, signal: G) {
        let key = signal.ordinal();
        let mut level = self.current;
        loop {
            match self.states[level].on_signal(&mut self.actor, key) {
                SignalDisposition::Transition(destination) => {
                    self.execute_transition(destination);
                    return;
                }
                SignalDisposition::Consumed => {
                    trace!(signal = signal.name(), "signal consumed");
                    return;
                }
                SignalDisposition::Unclaimed => match self.states[level].parent() {
                    Some(parent) => {
                        trace!(signal = signal.name(), "signal elevated");
                        level = parent;
                    }
                    None => {
                        trace!(signal = signal.name(), "signal dropped");
                        return;
                    }
                },
            }
        }
    }

    /// Borrows the actor.
    pub fn actor(&self) -> &A {
        &self.actor
    }

    /// Mutably borrows the actor.
    pub fn actor_mut(&mut self) -> &mut A {
        &mut self.actor
    }

    /// Consumes the machine and hands the actor back.
    pub fn into_actor(self) -> A {
        self.actor
    }

    pub(crate) fn node_mut(&mut self, ordinal: usize) -> &mut StateNode<A> {
        &mut self.states[ordinal]
    }

    /// Reflexive ancestor test: every state is its own ancestor.
    pub(crate) fn is_ancestor_of(&self, candidate: usize, child: usize) -> bool {
        if candidate == child {
            return true;
        }
        match self.states[child].parent() {
            Some(parent) => self.is_ancestor_of(candidate, parent),
            None => false,
        }
    }

    fn finalize(&mut self, initial: S) {
        self.current = initial.ordinal();
        debug!(initial = initial.name(), "setup concluded");
        self.notify_observer();
        self.enter_below(None, self.current);
    }

    /// Moves the active state: exit hooks fire from the old state up to the
    /// least common ancestor, enter hooks from below the ancestor down to the
    /// destination. A self-transition fires nothing.
    fn execute_transition(&mut self, destination: usize) {
        let ancestor = self.least_common_ancestor(self.current, destination);
        self.exit_up_to(ancestor);
        self.enter_below(ancestor, destination);
        let from = self.current;
        self.current = destination;
        debug!(
            from = S::from_ordinal(from).name(),
            to = S::from_ordinal(destination).name(),
            "state changed"
        );
        self.notify_observer();
    }

    fn notify_observer(&mut self) {
        if let Some(observer) = &self.observer {
            observer(&mut self.actor, S::from_ordinal(self.current));
        }
    }

    /// Deepest state that is an ancestor of (or equal to) both endpoints.
    ///
    /// `None` means no common ancestor exists: the whole source branch exits
    /// and the whole destination branch enters. Endpoints with undeclared
    /// parentage are assumed unrelated.
    fn least_common_ancestor(&self, source: usize, destination: usize) -> Option<usize> {
        if source == destination {
            return Some(source);
        }
        if !self.states[source].is_parent_declared()
            || !self.states[destination].is_parent_declared()
        {
            return None;
        }
        if self.is_ancestor_of(source, destination) {
            return Some(source);
        }
        self.states[source]
            .parent()
            .and_then(|parent| self.least_common_ancestor(parent, destination))
    }

    /// Exits every state from the active one up to, but not including,
    /// `ancestor`.
    fn exit_up_to(&mut self, ancestor: Option<usize>) {
        let mut level = self.current;
        loop {
            if Some(level) == ancestor {
                return;
            }
            self.states[level].exit(&mut self.actor);
            match self.states[level].parent() {
                Some(parent) => level = parent,
                None => return,
            }
        }
    }

    /// Enters every state strictly below `ancestor` on the chain ending at
    /// `level`, outermost first.
    fn enter_below(&mut self, ancestor: Option<usize>, level: usize) {
        if Some(level) == ancestor {
            return;
        }
        if let Some(parent) = self.states[level].parent() {
            if Some(parent) != ancestor {
                self.enter_below(ancestor, parent);
            }
        }
        self.states[level].enter(&mut self.actor);
    }
}
