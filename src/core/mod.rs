//! Core value types shared by rules and machines.
//!
//! - State identifiers via the `State` trait and the `StateId` name type
//! - Dynamically-typed transition arguments (`Arg`)
//! - Predicates that gate conditional rules
//!
//! Nothing in this module holds mutable state.

mod args;
mod predicate;
mod state;

pub use args::Arg;
pub use predicate::Predicate;
pub use state::{State, StateId};
