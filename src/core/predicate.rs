//! Predicates that gate conditional rules.
//!
//! A predicate is a caller-supplied boolean function over the arguments of a
//! transition call. It is pure: the engine may call it at most once per
//! transition attempt and relies on nothing but its return value.

use super::args::Arg;
use std::fmt;
use std::sync::Arc;

/// Pure predicate over transition arguments.
///
/// Predicates decide the shape of their own input. An argument list with the
/// wrong length or kinds must simply evaluate to `false`.
///
/// # Example
///
/// ```rust
/// use statekeeper::core::{Arg, Predicate};
///
/// let equal_integers = Predicate::new(|args: &[Arg]| match args {
///     [a, b] => matches!((a.as_int(), b.as_int()), (Some(a), Some(b)) if a == b),
///     _ => false,
/// });
///
/// assert!(equal_integers.check(&[Arg::Int(10), Arg::Int(10)]));
/// assert!(!equal_integers.check(&[Arg::Int(10), Arg::Int(15)]));
/// assert!(!equal_integers.check(&[Arg::Float(10.0), Arg::Int(10)]));
/// assert!(!equal_integers.check(&[]));
/// ```
#[derive(Clone)]
pub struct Predicate {
    check: Arc<dyn Fn(&[Arg]) -> bool + Send + Sync>,
}

impl Predicate {
    /// Create a predicate from a pure function.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&[Arg]) -> bool + Send + Sync + 'static,
    {
        Predicate {
            check: Arc::new(check),
        }
    }

    /// Evaluate the predicate against the given arguments.
    pub fn check(&self, args: &[Arg]) -> bool {
        (self.check)(args)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}
