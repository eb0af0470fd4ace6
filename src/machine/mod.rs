//! The rule-gated state machine.
//!
//! A machine is configured first (rules are registered against a fixed set
//! of states) and then operated (transitions are attempted). The first
//! transition attempt, successful or not, moves it from one phase to the
//! other for good.

mod error;

pub use error::MachineError;

use crate::core::{Arg, State};
use crate::rule::Rule;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Lifecycle phase of a machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting rule registrations; no transition attempted yet
    Configuring,

    /// At least one transition was attempted; the rule list is frozen
    Operational,
}

/// Finite state machine whose transitions are sanctioned by rules.
///
/// Only the first registered rule for a given `(from, to)` pair is ever
/// consulted. Later rules for the same pair are kept but unreachable.
///
/// # Example
///
/// ```rust
/// use statekeeper::core::StateId;
/// use statekeeper::{Machine, MachineError, Rule};
///
/// let initial = StateId::from("Initial");
/// let backlog = StateId::from("Backlog");
///
/// let mut machine = Machine::new(initial.clone(), [backlog.clone()]);
/// machine.add_rule(Rule::unconditional(initial, backlog.clone())).unwrap();
///
/// machine.transition(&backlog, &[]).unwrap();
/// assert_eq!(machine.state(), &backlog);
/// assert!(machine.is_final());
///
/// let late = Rule::unconditional(backlog.clone(), backlog);
/// assert_eq!(machine.add_rule(late), Err(MachineError::AlreadyFinalized));
/// ```
#[derive(Debug)]
pub struct Machine<S: State> {
    current: S,
    states: HashSet<S>,
    rules: Vec<Rule<S>>,
    phase: Phase,
}

impl<S: State> Machine<S> {
    /// Create a machine in `initial`.
    ///
    /// The valid-state set is `initial` plus every state in `others`;
    /// duplicates collapse.
    pub fn new(initial: S, others: impl IntoIterator<Item = S>) -> Self {
        let mut states: HashSet<S> = others.into_iter().collect();
        states.insert(initial.clone());

        Self {
            current: initial,
            states,
            rules: Vec::new(),
            phase: Phase::Configuring,
        }
    }

    /// Register a rule.
    ///
    /// Fails once any transition has been attempted, or when either endpoint
    /// is unknown (`from` is checked before `to`). The rule list is left
    /// untouched on failure.
    pub fn add_rule(&mut self, rule: Rule<S>) -> Result<(), MachineError> {
        if self.phase == Phase::Operational {
            debug!(
                from = rule.from().name(),
                to = rule.to().name(),
                "rule rejected after finalization"
            );
            return Err(MachineError::AlreadyFinalized);
        }

        self.require_state(rule.from())?;
        self.require_state(rule.to())?;

        debug!(
            from = rule.from().name(),
            to = rule.to().name(),
            conditional = rule.is_conditional(),
            "rule registered"
        );
        self.rules.push(rule);
        Ok(())
    }

    /// Attempt to move to `to`, handing `args` to the governing rule.
    ///
    /// Finalizes the machine before anything else happens. A transition to
    /// the current state always succeeds without consulting the state set
    /// or any rule. On failure the current state is unchanged.
    pub fn transition(&mut self, to: &S, args: &[Arg]) -> Result<(), MachineError> {
        self.phase = Phase::Operational;

        if *to == self.current {
            trace!(state = to.name(), "self-transition");
            return Ok(());
        }

        self.require_state(to)?;

        let Some(rule) = self.rules.iter().find(|r| r.matches(&self.current, to)) else {
            debug!(from = self.current.name(), to = to.name(), "no rule for transition");
            return Err(self.not_allowed(to));
        };

        if !rule.valid(&self.current, to, args) {
            debug!(
                from = self.current.name(),
                to = to.name(),
                args = args.len(),
                "rule denied transition"
            );
            return Err(self.not_allowed(to));
        }

        debug!(from = self.current.name(), to = to.name(), "transitioned");
        self.current = to.clone();
        Ok(())
    }

    /// Get current state (pure)
    pub fn state(&self) -> &S {
        &self.current
    }

    /// Whether any transition has been attempted yet (pure)
    pub fn is_final(&self) -> bool {
        self.phase == Phase::Operational
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check membership in the valid-state set (pure)
    pub fn has_state(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Iterate over the valid-state set, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.states.iter()
    }

    /// Registered rules, in registration order.
    pub fn rules(&self) -> &[Rule<S>] {
        &self.rules
    }

    fn require_state(&self, state: &S) -> Result<(), MachineError> {
        if self.states.contains(state) {
            Ok(())
        } else {
            debug!(state = state.name(), "unknown state");
            Err(MachineError::StateNotFound {
                state: state.name().to_string(),
            })
        }
    }

    fn not_allowed(&self, to: &S) -> MachineError {
        MachineError::TransitionNotAllowed {
            from: self.current.name().to_string(),
            to: to.name().to_string(),
        }
    }
}
