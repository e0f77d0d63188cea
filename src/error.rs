//! Error types for numeric validation.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

use crate::value::Value;

/// Result type alias for calc-square operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised when an input falls outside the accepted numeric set.
///
/// The only failure mode of the crate. It propagates synchronously to the
/// caller; there is no recovery or retry policy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input's type category is not integer or float.
    #[error("{value} must be an integer or a float.")]
    TypeMismatch {
        /// The offending value, carried for reporting.
        value: Value,
    },
}

impl Error {
    /// Create a type mismatch error for the offending value.
    pub fn type_mismatch(value: impl Into<Value>) -> Self {
        Self::TypeMismatch {
            value: value.into(),
        }
    }

    /// The offending value.
    pub fn value(&self) -> &Value {
        match self {
            Self::TypeMismatch { value } => value,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_message_names_value_and_expectation() {
        let err = Error::type_mismatch("5");
        assert_eq!(err.to_string(), "5 must be an integer or a float.");
    }

    #[test]
    fn test_message_renders_composite_values() {
        let err = Error::type_mismatch(Value::Sequence(vec![Value::Int(5)]));
        assert_eq!(err.to_string(), "[5] must be an integer or a float.");

        let err = Error::type_mismatch(Value::set([Value::Int(5)]));
        assert_eq!(err.to_string(), "{5} must be an integer or a float.");
    }

    #[test]
    fn test_value_accessor_returns_offender() {
        let err = Error::type_mismatch(Value::Bool(true));
        assert_eq!(err.value(), &Value::Bool(true));
    }
}
