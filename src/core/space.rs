//! Id spaces for states and signals.
//!
//! The machine addresses its nodes through a dense ordinal range rather than
//! a pointer graph. These traits describe how user-defined id types map onto
//! that range.

use std::fmt::Debug;

/// Identifier type for the states of one machine.
///
/// Implementations map every id onto the contiguous range `0..COUNT`; the
/// machine sizes its node storage from `COUNT` and indexes it by `ordinal`.
/// The [`state_space!`](crate::state_space) macro generates a conforming
/// C-like enum. A manual implementation is only needed when the id range does
/// not start at zero:
///
/// ```rust
/// use substate::StateSpace;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Gear {
///     Reverse = -1,
///     Neutral = 0,
///     Drive = 1,
/// }
///
/// impl StateSpace for Gear {
///     const COUNT: usize = 3;
///
///     fn ordinal(self) -> usize {
///         (self as isize + 1) as usize
///     }
///
///     fn from_ordinal(ordinal: usize) -> Self {
///         [Gear::Reverse, Gear::Neutral, Gear::Drive][ordinal]
///     }
///
///     fn name(self) -> &'static str {
///         match self {
///             Gear::Reverse => "Reverse",
///             Gear::Neutral => "Neutral",
///             Gear::Drive => "Drive",
///         }
///     }
/// }
///
/// assert_eq!(Gear::Reverse.ordinal(), 0);
/// assert_eq!(Gear::from_ordinal(2), Gear::Drive);
/// ```
pub trait StateSpace: Copy + Eq + Debug + 'static {
    /// Number of states in the space.
    const COUNT: usize;

    /// Position of this id within `0..COUNT`.
    fn ordinal(self) -> usize;

    /// Id at the given position. Callers must pass a value below `COUNT`.
    fn from_ordinal(ordinal: usize) -> Self;

    /// The id's name, for diagnostics.
    fn name(self) -> &'static str;
}

/// Identifier type for the signals delivered to one machine.
///
/// Signal ordinals key the per-state transition and action tables. Unlike
/// state ordinals they need not be dense; they only need to be stable.
pub trait SignalSpace: Copy + Eq + Debug + 'static {
    /// Table key for this signal.
    fn ordinal(self) -> usize;

    /// The signal's name, for diagnostics.
    fn name(self) -> &'static str;
}
