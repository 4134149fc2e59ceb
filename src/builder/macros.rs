//! Macros that generate id-space enums.

/// Generate a state id enum and its `StateSpace` implementation.
///
/// The enum is C-like; variants are numbered in declaration order, which is
/// the ordinal order the machine indexes by. The generated type derives
/// `Clone`, `Copy`, `PartialEq`, `Eq`, `Debug`, and the serde traits.
///
/// # Example
///
/// ```rust
/// use substate::{state_space, StateSpace};
///
/// state_space! {
///     pub enum Phase {
///         Idle,
///         Running,
///         Draining,
///     }
/// }
///
/// assert_eq!(Phase::COUNT, 3);
/// assert_eq!(Phase::Running.ordinal(), 1);
/// assert_eq!(Phase::from_ordinal(2), Phase::Draining);
/// assert_eq!(Phase::Draining.name(), "Draining");
/// ```
#[macro_export]
macro_rules! state_space {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            const ORDINAL_ORDER: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::StateSpace for $name {
            const COUNT: usize = $name::ORDINAL_ORDER.len();

            fn ordinal(self) -> usize {
                self as usize
            }

            fn from_ordinal(ordinal: usize) -> Self {
                $name::ORDINAL_ORDER[ordinal]
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate a signal id enum and its `SignalSpace` implementation.
///
/// # Example
///
/// ```rust
/// use substate::{signal_space, SignalSpace};
///
/// signal_space! {
///     pub enum Command {
///         Start,
///         Abort,
///     }
/// }
///
/// assert_eq!(Command::Abort.ordinal(), 1);
/// assert_eq!(Command::Start.name(), "Start");
/// ```
#[macro_export]
macro_rules! signal_space {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::SignalSpace for $name {
            fn ordinal(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
