//! Call-time arguments handed to transition predicates.

use serde::{Deserialize, Serialize};

/// A single dynamically-typed transition argument.
///
/// The engine never inspects arguments; they are forwarded untouched to the
/// predicate of whichever conditional rule governs the transition. Accessors
/// return `None` on a kind mismatch so predicates can reject malformed input
/// without panicking.
///
/// ```rust
/// use statekeeper::core::Arg;
///
/// let arg = Arg::from(10);
/// assert_eq!(arg.as_int(), Some(10));
/// assert_eq!(arg.as_float(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Arg {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl Arg {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i32> for Arg {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Arg {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_literals_become_int() {
        assert_eq!(Arg::from(10), Arg::Int(10));
        assert_eq!(Arg::from(10_i64), Arg::Int(10));
    }

    #[test]
    fn float_is_not_an_int() {
        let arg = Arg::from(10.0);
        assert_eq!(arg.as_int(), None);
        assert_eq!(arg.as_float(), Some(10.0));
        assert_ne!(arg, Arg::Int(10));
    }

    #[test]
    fn accessors_reject_other_kinds() {
        let arg = Arg::from("ready");
        assert_eq!(arg.as_str(), Some("ready"));
        assert_eq!(arg.as_int(), None);
        assert_eq!(arg.as_bool(), None);
        assert_eq!(Arg::from(true).as_bool(), Some(true));
    }

    #[test]
    fn arg_serializes_with_kind_tag() {
        let json = serde_json::to_string(&Arg::Int(7)).unwrap();
        assert_eq!(json, r#"{"Int":7}"#);

        let back: Arg = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Arg::Int(7));
    }
}
