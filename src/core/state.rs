//! One node in the state hierarchy.
//!
//! A node owns its parent link, its lifecycle hooks, and its signal-indexed
//! transition and action tables. It knows other states only as ordinals;
//! every walk across the hierarchy is the machine's job.

use std::collections::BTreeMap;

use tracing::trace;

use crate::core::guard::Guard;

/// Callback over the actor, stored per state for lifecycle hooks and signal
/// actions.
pub(crate) type Hook<A> = Box<dyn Fn(&mut A)>;

/// Parent link of a node.
///
/// A node whose parentage was never declared dispatches like a root, but the
/// distinction matters to the ancestor search: a transition touching an
/// undeclared node assumes no common ancestor and cascades both full
/// branches.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum ParentLink {
    Undeclared,
    Root,
    Child(usize),
}

/// What one hierarchy level did with a signal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum SignalDisposition {
    /// Nothing registered for the signal at this level; offer it to the
    /// parent.
    Unclaimed,
    /// The signal stops here: an action ran, a guard rejected the move, or
    /// both.
    Consumed,
    /// A transition to the carried ordinal should be executed.
    Transition(usize),
}

/// A transition registered for one signal: where to go and, optionally, the
/// condition under which going is allowed.
pub(crate) struct TransitionRecord<A> {
    pub(crate) destination: usize,
    pub(crate) guard: Option<Guard<A>>,
}

/// One state in the hierarchy.
pub(crate) struct StateNode<A> {
    parent: ParentLink,
    on_enter: Option<Hook<A>>,
    on_tick: Option<Hook<A>>,
    on_exit: Option<Hook<A>>,
    transitions: BTreeMap<usize, TransitionRecord<A>>,
    actions: BTreeMap<usize, Hook<A>>,
}

impl<A> StateNode<A> {
    pub(crate) fn new() -> Self {
        StateNode {
            parent: ParentLink::Undeclared,
            on_enter: None,
            on_tick: None,
            on_exit: None,
            transitions: BTreeMap::new(),
            actions: BTreeMap::new(),
        }
    }

    pub(crate) fn set_parent(&mut self, link: ParentLink) {
        self.parent = link;
    }

    /// Ordinal of the parent, if the node has one. Undeclared links and
    /// explicit roots both answer `None`.
    pub(crate) fn parent(&self) -> Option<usize> {
        match self.parent {
            ParentLink::Child(ordinal) => Some(ordinal),
            ParentLink::Root | ParentLink::Undeclared => None,
        }
    }

    pub(crate) fn is_parent_declared(&self) -> bool {
        self.parent != ParentLink::Undeclared
    }

    pub(crate) fn set_on_enter(&mut self, hook: Hook<A>) {
        self.on_enter = Some(hook);
    }

    pub(crate) fn set_on_tick(&mut self, hook: Hook<A>) {
        self.on_tick = Some(hook);
    }

    pub(crate) fn set_on_exit(&mut self, hook: Hook<A>) {
        self.on_exit = Some(hook);
    }

    /// Registers a transition, replacing any earlier one for the same signal.
    pub(crate) fn put_transition(&mut self, signal: usize, record: TransitionRecord<A>) {
        self.transitions.insert(signal, record);
    }

    /// Registers an action, replacing any earlier one for the same signal.
    pub(crate) fn put_action(&mut self, signal: usize, action: Hook<A>) {
        self.actions.insert(signal, action);
    }

    pub(crate) fn enter(&self, actor: &mut A) {
        if let Some(hook) = &self.on_enter {
            hook(actor);
        }
    }

    pub(crate) fn exit(&self, actor: &mut A) {
        if let Some(hook) = &self.on_exit {
            hook(actor);
        }
    }

    /// Runs the local tick hook, answering whether one was bound. When the
    /// answer is `false` the machine walks the parent chain for a handler.
    pub(crate) fn tick(&self, actor: &mut A) -> bool {
        match &self.on_tick {
            Some(hook) => {
                hook(actor);
                true
            }
            None => false,
        }
    }

    /// Handles a signal at this level.
    ///
    /// The registered action (if any) runs first, then the registered
    /// transition (if any) is attempted behind its guard. A registered
    /// transition claims the signal even when the guard rejects the move, so
    /// a gated signal never leaks to the parent.
    pub(crate) fn on_signal(&self, actor: &mut A, signal: usize) -> SignalDisposition {
        let mut claimed = false;
        if let Some(action) = self.actions.get(&signal) {
            action(actor);
            claimed = true;
        }
        if let Some(record) = self.transitions.get(&signal) {
            let allowed = match &record.guard {
                Some(guard) => guard.check(actor),
                None => true,
            };
            if allowed {
                return SignalDisposition::Transition(record.destination);
            }
            trace!(signal, "guard held transition back");
            claimed = true;
        }
        if claimed {
            SignalDisposition::Consumed
        } else {
            SignalDisposition::Unclaimed
        }
    }
}
