//! Externally supplied values awaiting conversion
//!
//! Callers hand heterogeneous inputs (a raw count, a wrapped duration, an
//! interval, a textual period) to the converter layer as a [`Value`]. The
//! [`ValueType`] tag is what converter registries dispatch on.

use crate::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a [`Value`], used as a registry key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValueType {
    Null,
    Long,
    Text,
    Bool,
    Duration,
    StdDuration,
    Interval,
}

impl ValueType {
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Null => "Null",
            ValueType::Long => "Long",
            ValueType::Text => "Text",
            ValueType::Bool => "Bool",
            ValueType::Duration => "Duration",
            ValueType::StdDuration => "StdDuration",
            ValueType::Interval => "Interval",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input value for duration conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Null,
    Long(i64),
    Text(String),
    Bool(bool),
    Duration(Duration),
    StdDuration(std::time::Duration),
    /// Half-open span between two instants
    Interval { start: i64, end: i64 },
}

impl Value {
    // ========== Safe Accessors (never panic) ==========

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Value::Duration(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_std_duration(&self) -> Option<std::time::Duration> {
        match self {
            Value::StdDuration(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_interval(&self) -> Option<(i64, i64)> {
        match self {
            Value::Interval { start, end } => Some((*start, *end)),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Long(_) => ValueType::Long,
            Value::Text(_) => ValueType::Text,
            Value::Bool(_) => ValueType::Bool,
            Value::Duration(_) => ValueType::Duration,
            Value::StdDuration(_) => ValueType::StdDuration,
            Value::Interval { .. } => ValueType::Interval,
        }
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        self.value_type().name()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Long(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Value::Duration(d)
    }
}

impl From<std::time::Duration> for Value {
    fn from(d: std::time::Duration) -> Self {
        Value::StdDuration(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(42i64), Value::Long(42));
        assert_eq!(Value::from("PT1S").as_text(), Some("PT1S"));
        assert!(Value::from(None::<i64>).is_null());
        assert_eq!(Value::from(Some(7i64)).as_long(), Some(7));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::Null.type_name(), "Null");
        assert_eq!(Value::Bool(true).type_name(), "Bool");
        assert_eq!(Value::Interval { start: 0, end: 1 }.value_type(), ValueType::Interval);
        assert_eq!(
            Value::from(std::time::Duration::from_secs(1)).value_type(),
            ValueType::StdDuration
        );
    }

    #[test]
    fn test_accessors_reject_other_shapes() {
        let v = Value::Long(5);
        assert_eq!(v.as_text(), None);
        assert_eq!(v.as_duration(), None);
        assert_eq!(v.as_interval(), None);
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&Value::Long(3)).unwrap();
        assert_eq!(json, r#"{"type":"Long","value":3}"#);
        let back: Value = serde_json::from_str(r#"{"type":"Text","value":"PT2S"}"#).unwrap();
        assert_eq!(back, Value::Text("PT2S".to_string()));
    }
}
