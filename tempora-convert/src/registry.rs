//! Converter Registry

use crate::{
    DurationConverter, IntervalConverter, IsoPeriodConverter, LongConverter,
    ReadableDurationConverter, StdDurationConverter,
};
use std::collections::HashMap;
use std::sync::Arc;
use tempora_core::{Result, TemporalError, Value, ValueType};
use tracing::trace;

/// Selects a duration converter by the shape of the input value
#[derive(Clone, Default)]
pub struct ConverterRegistry {
    converters: HashMap<ValueType, Arc<dyn DurationConverter>>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self { converters: HashMap::new() }
    }

    /// Long, Duration, StdDuration, Interval and ISO text
    pub fn standard() -> Self {
        Self::new()
            .with_converter(LongConverter)
            .with_converter(ReadableDurationConverter)
            .with_converter(StdDurationConverter)
            .with_converter(IntervalConverter)
            .with_converter(IsoPeriodConverter)
    }

    /// Builder: register a converter, replacing any other for the same type
    pub fn with_converter<C: DurationConverter + 'static>(mut self, converter: C) -> Self {
        self.converters.insert(converter.supported_type(), Arc::new(converter));
        self
    }

    pub fn get(&self, value_type: ValueType) -> Option<&dyn DurationConverter> {
        self.converters.get(&value_type).map(|c| c.as_ref())
    }

    pub fn converter_for(&self, value: &Value) -> Result<&dyn DurationConverter> {
        let value_type = value.value_type();
        if value_type == ValueType::Null {
            return Err(TemporalError::missing("value to convert"));
        }
        self.get(value_type).ok_or_else(|| {
            TemporalError::type_mismatch(
                format!("one of [{}]", self.supported_names().join(", ")),
                value_type.name(),
            )
        })
    }

    /// Milliseconds represented by `value`, via the matching converter
    pub fn duration_millis(&self, value: &Value) -> Result<i64> {
        let converter = self.converter_for(value)?;
        trace!(value_type = %value.value_type(), converter = converter.meta().name, "converting");
        converter.duration_millis(value)
    }

    /// Registered input types, in declaration order
    pub fn supported_types(&self) -> Vec<ValueType> {
        let mut types: Vec<ValueType> = self.converters.keys().copied().collect();
        types.sort();
        types
    }

    fn supported_names(&self) -> Vec<&'static str> {
        self.supported_types().iter().map(|t| t.name()).collect()
    }
}

impl std::fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("supported_types", &self.supported_types())
            .finish()
    }
}
