//! Dynamically typed value model.
//!
//! Rust resolves types at compile time, so "accept an integer or a float,
//! reject everything else" is expressed as a tagged union over the closed
//! set of run-time categories a caller can hand us. [`Value::is_numeric`]
//! is the type-category predicate; everything else on [`Value`] exists so
//! rejected inputs can be reported and round-tripped faithfully.

use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A value whose type category is only known at run time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Signed integer.
    Int(i64),
    /// IEEE-754 double-precision float.
    Float(f64),
    /// Boolean. Deliberately not numeric: the accepted set is closed over
    /// integer and float only.
    Bool(bool),
    /// Text.
    Text(String),
    /// Ordered sequence of values.
    Sequence(Vec<Value>),
    /// Duplicate-free collection of values. Construct via [`Value::set`].
    Set(Vec<Value>),
    /// String-keyed mapping.
    Mapping(BTreeMap<String, Value>),
    /// Absent value.
    Null,
}

impl Value {
    /// Build a set value, dropping duplicates while preserving first-seen
    /// order.
    pub fn set(values: impl IntoIterator<Item = Value>) -> Self {
        let mut unique: Vec<Value> = Vec::new();
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        Self::Set(unique)
    }

    /// The type category of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Bool(_) => ValueKind::Bool,
            Self::Text(_) => ValueKind::Text,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Set(_) => ValueKind::Set,
            Self::Mapping(_) => ValueKind::Mapping,
            Self::Null => ValueKind::Null,
        }
    }

    /// Check whether this value belongs to the accepted numeric set.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Sequence(values) => write!(f, "[{}]", values.iter().join(", ")),
            Self::Set(values) => write!(f, "{{{}}}", values.iter().join(", ")),
            Self::Mapping(entries) => {
                let body = entries
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .join(", ");
                write!(f, "{{{body}}}")
            }
            Self::Null => write!(f, "null"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
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

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::Sequence(values)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self::Mapping(entries)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_i64().map_or_else(
                // u64-only and fractional JSON numbers share the float lane
                || Self::Float(n.as_f64().unwrap_or(f64::NAN)),
                Self::Int,
            ),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(values) => {
                Self::Sequence(values.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Type category of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Signed integer.
    Int,
    /// Double-precision float.
    Float,
    /// Boolean.
    Bool,
    /// Text.
    Text,
    /// Ordered sequence.
    Sequence,
    /// Duplicate-free collection.
    Set,
    /// String-keyed mapping.
    Mapping,
    /// Absent value.
    Null,
}

impl ValueKind {
    /// Check whether this category belongs to the accepted numeric set.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Text => "text",
            Self::Sequence => "sequence",
            Self::Set => "set",
            Self::Mapping => "mapping",
            Self::Null => "null",
        };
        write!(f, "{s}")
    }
}

/// Numeric result of a computation, preserving the integer/float split of
/// the input representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    /// Result representable as a signed integer.
    Int(i64),
    /// Result carried in double precision.
    Float(f64),
}

impl Number {
    /// The result widened to double precision.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(x) => x,
        }
    }

    /// The type category of this result.
    pub fn kind(self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> f64 {
        number.as_f64()
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        match number {
            Number::Int(n) => Self::Int(n),
            Number::Float(x) => Self::Float(x),
        }
    }
}
