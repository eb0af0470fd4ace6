//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::machine::Machine;
use crate::rule::Rule;

/// Builder for constructing machines with a fluent API.
///
/// Rules are registered in the order they were added, through
/// [`Machine::add_rule`], so they get exactly the same validation.
pub struct MachineBuilder<S: State> {
    initial: Option<S>,
    states: Vec<S>,
    rules: Vec<Rule<S>>,
}

impl<S: State> MachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare one more valid state.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Declare several valid states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Add a rule.
    pub fn rule(mut self, rule: Rule<S>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules at once.
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule<S>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Build the machine.
    /// Returns an error if the initial state is missing or a rule references
    /// an undeclared state.
    pub fn build(self) -> Result<Machine<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = Machine::new(initial, self.states);
        for rule in self.rules {
            machine.add_rule(rule)?;
        }

        Ok(machine)
    }
}

impl<S: State> Default for MachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
