//! Transition rules.
//!
//! A rule is bound to one `(from, to)` pair of states and decides whether a
//! move between them is currently permitted. Rules are immutable once built.

use crate::core::{Arg, Predicate, State};
use std::fmt;

/// Permission to move from one state to another.
///
/// # Example
///
/// ```rust
/// use statekeeper::core::{Arg, StateId};
/// use statekeeper::Rule;
///
/// let open = Rule::unconditional(StateId::from("Initial"), StateId::from("Backlog"));
/// assert!(open.valid(&"Initial".into(), &"Backlog".into(), &[]));
///
/// let gated = Rule::conditional(StateId::from("Backlog"), StateId::from("Progress"), |args: &[Arg]| {
///     args.first().and_then(Arg::as_bool) == Some(true)
/// });
/// assert!(!gated.valid(&"Backlog".into(), &"Progress".into(), &[]));
/// assert!(gated.valid(&"Backlog".into(), &"Progress".into(), &[Arg::Bool(true)]));
/// ```
#[derive(Clone)]
pub enum Rule<S: State> {
    /// Always permits `from -> to`.
    Unconditional { from: S, to: S },

    /// Permits `from -> to` only when the predicate accepts the call arguments.
    Conditional {
        from: S,
        to: S,
        predicate: Predicate,
    },
}

impl<S: State> Rule<S> {
    pub fn unconditional(from: S, to: S) -> Self {
        Self::Unconditional { from, to }
    }

    pub fn conditional<F>(from: S, to: S, predicate: F) -> Self
    where
        F: Fn(&[Arg]) -> bool + Send + Sync + 'static,
    {
        Self::Conditional {
            from,
            to,
            predicate: Predicate::new(predicate),
        }
    }

    /// The state this rule moves away from.
    pub fn from(&self) -> &S {
        match self {
            Self::Unconditional { from, .. } | Self::Conditional { from, .. } => from,
        }
    }

    /// The state this rule moves into.
    pub fn to(&self) -> &S {
        match self {
            Self::Unconditional { to, .. } | Self::Conditional { to, .. } => to,
        }
    }

    pub fn is_conditional(&self) -> bool {
        matches!(self, Self::Conditional { .. })
    }

    /// Check the endpoints only, without consulting any predicate.
    pub fn matches(&self, from: &S, to: &S) -> bool {
        self.from() == from && self.to() == to
    }

    /// Check whether this rule permits `from -> to` for the given arguments.
    ///
    /// The predicate of a conditional rule is only evaluated when the
    /// endpoints match, and its answer is returned as is.
    pub fn valid(&self, from: &S, to: &S, args: &[Arg]) -> bool {
        if !self.matches(from, to) {
            return false;
        }

        match self {
            Self::Unconditional { .. } => true,
            Self::Conditional { predicate, .. } => predicate.check(args),
        }
    }
}

impl<S: State> fmt::Debug for Rule<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_conditional() {
            "Conditional"
        } else {
            "Unconditional"
        };
        f.debug_struct(kind)
            .field("from", self.from())
            .field("to", self.to())
            .finish()
    }
}
