//! Converter traits

use serde::Serialize;
use tempora_core::{Result, TemporalError, Value, ValueType};

/// Metadata for a converter
#[derive(Debug, Clone, Serialize)]
pub struct ConverterMeta {
    pub name: &'static str,
    pub accepts: ValueType,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

/// Anything that understands exactly one input shape
pub trait Converter: Send + Sync {
    fn meta(&self) -> ConverterMeta;

    fn supported_type(&self) -> ValueType {
        self.meta().accepts
    }

    /// `Null` is an illegal argument, any other foreign shape a type mismatch
    fn check_input(&self, value: &Value) -> Result<()> {
        let accepts = self.supported_type();
        match value.value_type() {
            ValueType::Null => Err(TemporalError::missing("value to convert")),
            got if got == accepts => Ok(()),
            got => Err(TemporalError::type_mismatch(accepts.name(), got.name())),
        }
    }
}

/// Extracts a millisecond duration from an external value
pub trait DurationConverter: Converter {
    fn duration_millis(&self, value: &Value) -> Result<i64>;
}
