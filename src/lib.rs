//! Statekeeper: a small rule-gated finite state machine engine
//!
//! A [`Machine`] tracks one current state out of a fixed set of named
//! states and only moves when a registered [`Rule`] sanctions the move.
//! Everything is synchronous and single-owner; wrap a machine in a lock if
//! it has to be shared.
//!
//! # Core Concepts
//!
//! - **State**: an immutable, comparable identifier (`State` trait, `StateId`)
//! - **Rule**: permission for one `(from, to)` pair, either unconditional or
//!   gated by a predicate over call-time arguments
//! - **Finalization**: the first transition attempt freezes the rule list
//!
//! # Example
//!
//! ```rust
//! use statekeeper::core::{Arg, StateId};
//! use statekeeper::{args, Machine, MachineError, Rule};
//!
//! let initial = StateId::from("Initial");
//! let backlog = StateId::from("Backlog");
//! let progress = StateId::from("Progress");
//!
//! let mut machine = Machine::new(initial.clone(), [backlog.clone(), progress.clone()]);
//! machine.add_rule(Rule::unconditional(initial, backlog.clone())).unwrap();
//! machine
//!     .add_rule(Rule::conditional(backlog.clone(), progress.clone(), |args: &[Arg]| {
//!         matches!(args, [a, b] if a.as_int().is_some() && a.as_int() == b.as_int())
//!     }))
//!     .unwrap();
//!
//! machine.transition(&backlog, &[]).unwrap();
//! assert!(matches!(
//!     machine.transition(&progress, &args![10, 15]),
//!     Err(MachineError::TransitionNotAllowed { .. })
//! ));
//! machine.transition(&progress, &args![10, 10]).unwrap();
//! assert_eq!(machine.state(), &progress);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod rule;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use crate::core::{Arg, Predicate, State, StateId};
pub use machine::{Machine, MachineError, Phase};
pub use rule::Rule;
