//! Substate: a fluent hierarchical state machine for embedding in actors.
//!
//! An actor declares a tree (or forest) of states, each with an optional
//! parent, enter/tick/exit hooks, guarded transitions, and signal-triggered
//! actions. The hierarchy is fixed once setup concludes; afterwards the actor
//! drives the machine with [`Machine::tick`] and [`Machine::signal`], and
//! states without a local handler delegate to their ancestors. Moving between
//! states fires exit hooks up to the least common ancestor of the two states
//! and enter hooks back down, so outer scopes are never churned by movement
//! inside them.
//!
//! # Core Concepts
//!
//! - **Id spaces**: state and signal identifiers map onto dense ordinal
//!   ranges via the [`StateSpace`] and [`SignalSpace`] traits (generated by
//!   [`state_space!`] and [`signal_space!`])
//! - **Actor**: the owning object; every hook, guard, and action is a
//!   callback over it
//! - **Guards**: predicates that gate individual transitions without
//!   unclaiming the signal
//!
//! # Example
//!
//! ```rust
//! use substate::{signal_space, state_space, BuildError, Machine};
//!
//! state_space! {
//!     enum Mode {
//!         Operating,
//!         Idle,
//!         Busy,
//!         Fault,
//!     }
//! }
//!
//! signal_space! {
//!     enum Event {
//!         Start,
//!         Stop,
//!         Halt,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Pump {
//!     mode: Option<Mode>,
//!     strokes: u32,
//! }
//!
//! fn main() -> Result<(), BuildError> {
//!     let mut hsm = Machine::<Pump, Mode, Event>::new(Pump::default());
//!
//!     hsm.define_state(Mode::Operating)
//!         .no_parent()
//!         .on_signal(Event::Halt).go_to(Mode::Fault);
//!
//!     hsm.define_state(Mode::Idle)
//!         .parent(Mode::Operating)?
//!         .on_signal(Event::Start).go_to(Mode::Busy);
//!
//!     hsm.define_state(Mode::Busy)
//!         .parent(Mode::Operating)?
//!         .on_tick(|p: &mut Pump| p.strokes += 1)
//!         .on_signal(Event::Stop).go_to(Mode::Idle);
//!
//!     hsm.define_state(Mode::Fault).no_parent();
//!
//!     hsm.conclude_setup_with(Mode::Idle, |p, mode| p.mode = Some(mode));
//!
//!     hsm.signal(Event::Start);
//!     hsm.tick();
//!     // Busy has no handler for Halt; Operating catches the elevated signal.
//!     hsm.signal(Event::Halt);
//!
//!     assert_eq!(hsm.actor().mode, Some(Mode::Fault));
//!     assert_eq!(hsm.actor().strokes, 1);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::builder::{BuildError, ParentBinder, SignalBinder, StateBuilder};
pub use crate::core::{Guard, Machine, SignalSpace, StateSpace};
