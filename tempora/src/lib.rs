//! Tempora - Calendrical duration arithmetic
//!
//! Duration fields convert between counts of a unit and milliseconds.
//! Precise units (seconds through weeks) have a fixed length; imprecise
//! ones (months, years, centuries) ask the chronology. All arithmetic is
//! overflow-checked and fails rather than wrapping.

pub use tempora_convert::{
    Converter, ConverterMeta, ConverterRegistry, DurationConverter, IntervalConverter,
    IsoPeriodConverter, LongConverter, ReadableDurationConverter, StdDurationConverter,
};
pub use tempora_core::{
    arith, codes, constants, Duration, DurationFieldType, ErrorKind, Instant, Result,
    TemporalError, Value, ValueType,
};
pub use tempora_field::{
    Chronology, DurationField, Field, FieldConfig, FieldRegistry, ImpreciseDurationField,
    IsoChronology, PreciseDurationField, MAX_PROBES_VAR,
};

use serde_json::json;
use std::sync::Arc;
use tempora_core::arith::safe_add;
use tracing::debug;

/// Main Tempora engine
#[derive(Debug, Clone)]
pub struct Tempora {
    fields: Arc<FieldRegistry>,
    converters: Arc<ConverterRegistry>,
}

impl Tempora {
    /// ISO chronology with the given configuration
    pub fn new(config: FieldConfig) -> Result<Self> {
        Self::with_chronology(Arc::new(IsoChronology), &config)
    }

    /// ISO chronology, default configuration
    pub fn iso() -> Result<Self> {
        Self::new(FieldConfig::default())
    }

    /// ISO chronology configured from `TEMPORA_MAX_PROBES`
    pub fn from_env() -> Result<Self> {
        Self::new(FieldConfig::from_env()?)
    }

    pub fn with_chronology(chronology: Arc<dyn Chronology>, config: &FieldConfig) -> Result<Self> {
        let fields = FieldRegistry::standard(chronology, config)?;
        debug!(fields = fields.len(), "tempora engine ready");
        Ok(Self {
            fields: Arc::new(fields),
            converters: Arc::new(ConverterRegistry::standard()),
        })
    }

    /// Builder: replace the converter set
    pub fn with_converters(mut self, converters: ConverterRegistry) -> Self {
        self.converters = Arc::new(converters);
        self
    }

    pub fn field(&self, unit: DurationFieldType) -> Result<&Field> {
        self.fields.field(unit)
    }

    pub fn fields(&self) -> &FieldRegistry {
        &self.fields
    }

    pub fn converters(&self) -> &ConverterRegistry {
        &self.converters
    }

    /// `instant` moved by `value` units
    pub fn add(&self, instant: Instant, unit: DurationFieldType, value: i64) -> Result<Instant> {
        self.field(unit)?.add(instant, value)
    }

    /// Whole units between two instants, truncated toward zero
    pub fn difference(
        &self,
        minuend: Instant,
        subtrahend: Instant,
        unit: DurationFieldType,
    ) -> Result<i64> {
        self.field(unit)?.difference_as_long(minuend, subtrahend)
    }

    /// `instant` moved by the duration an external value represents
    pub fn add_value(&self, instant: Instant, value: &Value) -> Result<Instant> {
        let millis = self.converters.duration_millis(value)?;
        safe_add(instant, millis)
    }

    /// Exact length of an external value
    pub fn to_duration(&self, value: &Value) -> Result<Duration> {
        self.converters.duration_millis(value).map(Duration::from_millis)
    }

    /// Registered fields and converters as JSON
    pub fn describe(&self) -> serde_json::Value {
        let fields: Vec<serde_json::Value> = self
            .fields
            .fields()
            .iter()
            .map(|f| {
                json!({
                    "type": f.field_type(),
                    "precise": f.is_precise(),
                    "unit_millis": f.unit_millis(),
                })
            })
            .collect();
        json!({
            "fields": fields,
            "converters": self.converters.supported_types(),
        })
    }
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::Tempora;
    pub use tempora_convert::prelude::*;
    pub use tempora_field::prelude::*;
}
