//! A ready-made closed payload for callers that do not bring their own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State payload covering the scalar kinds a driver typically labels states with.
///
/// Rendering rules: integers in decimal, floats with six fractional digits,
/// booleans as `true`/`false`, text verbatim.
///
/// # Example
///
/// ```rust
/// use fsmgraph::Value;
///
/// assert_eq!(Value::from(7).to_string(), "7");
/// assert_eq!(Value::from(0.5).to_string(), "0.500000");
/// assert_eq!(Value::from(false).to_string(), "false");
/// assert_eq!(Value::from("locked").to_string(), "locked");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:.6}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
