//! Structured errors for temporal arithmetic
//!
//! Every failure is a value. Nothing at this layer clamps, wraps or
//! substitutes an approximate result for an exact one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const ARITHMETIC: &str = "ARITHMETIC";
    pub const ILLEGAL_ARGUMENT: &str = "ILLEGAL_ARGUMENT";
    pub const ILLEGAL_FIELD_VALUE: &str = "ILLEGAL_FIELD_VALUE";
    pub const TYPE_MISMATCH: &str = "TYPE_MISMATCH";
    pub const UNSUPPORTED: &str = "UNSUPPORTED";
}

/// Broad category of a [`TemporalError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Result not representable in 64-bit signed milliseconds
    Arithmetic,
    /// Bad constructor argument or missing value
    IllegalArgument,
    /// A field value outside its permitted bounds
    IllegalFieldValue,
    /// Converter handed a value shape it does not understand
    TypeMismatch,
    /// Operation not available for this unit or chronology
    Unsupported,
}

/// Error type for all temporal operations
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemporalError {
    #[error("Arithmetic error: {message}")]
    Arithmetic { message: String },

    #[error("Illegal argument: {message}")]
    IllegalArgument { message: String },

    #[error("Value {value} for {field} must be in the range [{lower},{upper}]")]
    IllegalFieldValue {
        field: String,
        value: i64,
        lower: i64,
        upper: i64,
    },

    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Unsupported: {message}")]
    Unsupported { message: String },
}

pub type Result<T> = std::result::Result<T, TemporalError>;

impl TemporalError {
    // ========== Constructors ==========

    pub fn arithmetic(message: impl Into<String>) -> Self {
        Self::Arithmetic { message: message.into() }
    }

    /// Overflow of a binary operation, e.g. `overflow("add", a, b)`
    pub fn overflow(op: &str, a: i64, b: i64) -> Self {
        Self::arithmetic(format!("The calculation caused an overflow: {} {} {}", a, op, b))
    }

    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument { message: message.into() }
    }

    /// An absent value where one is required
    pub fn missing(what: &str) -> Self {
        Self::illegal_argument(format!("The {} must not be null", what))
    }

    pub fn illegal_field_value(field: impl Into<String>, value: i64, lower: i64, upper: i64) -> Self {
        Self::IllegalFieldValue { field: field.into(), value, lower, upper }
    }

    pub fn type_mismatch(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self::TypeMismatch { expected: expected.into(), got: got.into() }
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported { message: message.into() }
    }

    // ========== Inspection ==========

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Arithmetic { .. } => ErrorKind::Arithmetic,
            Self::IllegalArgument { .. } => ErrorKind::IllegalArgument,
            Self::IllegalFieldValue { .. } => ErrorKind::IllegalFieldValue,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::Unsupported { .. } => ErrorKind::Unsupported,
        }
    }

    /// Machine-readable code from [`codes`]
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Arithmetic => codes::ARITHMETIC,
            ErrorKind::IllegalArgument => codes::ILLEGAL_ARGUMENT,
            ErrorKind::IllegalFieldValue => codes::ILLEGAL_FIELD_VALUE,
            ErrorKind::TypeMismatch => codes::TYPE_MISMATCH,
            ErrorKind::Unsupported => codes::UNSUPPORTED,
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        self.kind() == ErrorKind::Arithmetic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_code() {
        let err = TemporalError::overflow("+", i64::MAX, 1);
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
        assert_eq!(err.code(), codes::ARITHMETIC);
        assert!(err.is_arithmetic());

        let err = TemporalError::type_mismatch("Long", "Bool");
        assert_eq!(err.code(), codes::TYPE_MISMATCH);
        assert!(!err.is_arithmetic());
    }

    #[test]
    fn test_display() {
        let err = TemporalError::illegal_field_value("months", 13, 1, 12);
        assert_eq!(format!("{}", err), "Value 13 for months must be in the range [1,12]");

        let err = TemporalError::missing("duration");
        assert!(format!("{}", err).contains("must not be null"));
    }

    #[test]
    fn test_serialize_roundtrip() {
        let err = TemporalError::type_mismatch("Text", "Bool");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"kind\":\"type_mismatch\""));
        let back: TemporalError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
