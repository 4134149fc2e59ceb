//! Setup errors.

use thiserror::Error;

/// Errors surfaced while declaring the state hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Adopting the named parent would close a loop in the parent graph,
    /// leaving the ancestor walks without a terminating root.
    #[error("state {state} cannot adopt {parent} as its parent: {parent} already descends from {state}")]
    CyclicParentage {
        state: &'static str,
        parent: &'static str,
    },
}
