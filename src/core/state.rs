//! State identifiers for rule-gated machines.
//!
//! A state carries no behavior of its own. It is an immutable, comparable
//! name, and machines only ever compare states by value.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Trait for state machine states.
///
/// All methods are pure. States are plain values: a machine stores them in a
/// hash set, compares them for equality and reports their name in errors.
///
/// # Required Traits
///
/// - `Clone`: the machine keeps its own copy of every registered state
/// - `Eq` + `Hash`: membership in the valid-state set
/// - `Debug`: diagnostics
/// - `Serialize` + `Deserialize`: callers may log or store states
///
/// # Example
///
/// ```rust
/// use statekeeper::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum TaskState {
///     Pending,
///     Running,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///         }
///     }
/// }
///
/// assert_eq!(TaskState::Running.name(), "Running");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// An opaque named state.
///
/// Use this when the set of states is only known at runtime, or when a
/// dedicated enum would be overkill.
///
/// ```rust
/// use statekeeper::core::{State, StateId};
///
/// let backlog = StateId::from("Backlog");
/// assert_eq!(backlog.name(), "Backlog");
/// assert_eq!(backlog, StateId::new("Backlog"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl State for StateId {
    fn name(&self) -> &str {
        &self.0
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for StateId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Backlog,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Backlog => "Backlog",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Backlog.name(), "Backlog");
    }

    #[test]
    fn state_id_equality_is_by_value() {
        let a = StateId::from("Progress");
        let b = StateId::new(String::from("Progress"));
        let c = StateId::from("Canceled");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn state_id_displays_its_name() {
        assert_eq!(StateId::from("Backlog").to_string(), "Backlog");
    }

    #[test]
    fn state_id_serializes_as_plain_string() {
        let state = StateId::from("Initial");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"Initial\"");

        let deserialized: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
