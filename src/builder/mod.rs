//! Fluent setup surface for the machine.
//!
//! Definition runs in two enforced stages: [`ParentBinder`] will not hand out
//! any other configuration until the state's parentage is declared, and
//! [`SignalBinder`] scopes transitions and actions to one signal at a time.
//! The id-space macros live here as well.

pub mod define;
pub mod error;
pub mod macros;
pub mod signal;

pub use define::{ParentBinder, StateBuilder};
pub use error::BuildError;
pub use signal::SignalBinder;
