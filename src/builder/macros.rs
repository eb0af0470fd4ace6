//! Macros for ergonomic machine construction.

/// Generate a `State` implementation for a fieldless enum.
///
/// Each variant's name is its identifier.
///
/// # Example
///
/// ```
/// use statekeeper::core::State;
/// use statekeeper::state_enum;
///
/// state_enum! {
///     pub enum TicketState {
///         Open,
///         Closed,
///     }
/// }
///
/// assert_eq!(TicketState::Closed.name(), "Closed");
/// ```
#[macro_export]
macro_rules! state_enum {
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
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Build a `Vec<Arg>` from values convertible into [`Arg`](crate::core::Arg).
///
/// # Example
///
/// ```
/// use statekeeper::args;
/// use statekeeper::core::Arg;
///
/// let args = args![10.0, 10, "go"];
/// assert_eq!(args, vec![Arg::Float(10.0), Arg::Int(10), Arg::Str("go".to_string())]);
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::core::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::core::Arg::from($arg)),+]
    };
}
