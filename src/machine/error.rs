//! Errors surfaced by machine operations.

use thiserror::Error;

/// Errors returned by [`Machine::add_rule`](super::Machine::add_rule) and
/// [`Machine::transition`](super::Machine::transition).
///
/// A machine stays usable after any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// A referenced state is not in the machine's valid-state set
    #[error("state '{state}' not found")]
    StateNotFound { state: String },

    /// A rule was added after the first transition attempt
    #[error("rules must be defined before the first transition")]
    AlreadyFinalized,

    /// No rule covers the move, or the covering rule denied it
    #[error("transition from '{from}' to '{to}' not allowed")]
    TransitionNotAllowed { from: String, to: String },
}
