//! Field Registry

use crate::{Chronology, DurationField, Field, FieldConfig, ImpreciseDurationField, PreciseDurationField};
use std::collections::HashMap;
use std::sync::Arc;
use tempora_core::constants::{
    MILLIS_PER_CENTURY, MILLIS_PER_DAY, MILLIS_PER_HALFDAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE,
    MILLIS_PER_MONTH, MILLIS_PER_SECOND, MILLIS_PER_WEEK, MILLIS_PER_YEAR,
};
use tempora_core::{DurationFieldType, Result, TemporalError};
use tracing::debug;

/// Immutable map from unit to the field that implements it
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    fields: HashMap<DurationFieldType, Field>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self { fields: HashMap::new() }
    }

    /// The standard set for a Gregorian chronology: millis through weeks
    /// are precise, months, years and centuries ask `chronology`.
    pub fn standard(chronology: Arc<dyn Chronology>, config: &FieldConfig) -> Result<Self> {
        config.validate()?;

        let precise = [
            (DurationFieldType::SECONDS, MILLIS_PER_SECOND),
            (DurationFieldType::MINUTES, MILLIS_PER_MINUTE),
            (DurationFieldType::HOURS, MILLIS_PER_HOUR),
            (DurationFieldType::HALFDAYS, MILLIS_PER_HALFDAY),
            (DurationFieldType::DAYS, MILLIS_PER_DAY),
            (DurationFieldType::WEEKS, MILLIS_PER_WEEK),
        ];
        let imprecise = [
            (DurationFieldType::MONTHS, MILLIS_PER_MONTH),
            (DurationFieldType::YEARS, MILLIS_PER_YEAR),
            (DurationFieldType::CENTURIES, MILLIS_PER_CENTURY),
        ];

        let mut registry = Self::new().with_field(PreciseDurationField::millis_field());
        for (field_type, unit) in precise {
            registry = registry.with_field(PreciseDurationField::new(field_type, unit)?);
        }
        for (field_type, average) in imprecise {
            let field = ImpreciseDurationField::new(field_type, average, chronology.clone())?
                .with_config(config);
            registry = registry.with_field(field);
        }

        debug!(
            chronology = chronology.name(),
            fields = registry.len(),
            max_probes = config.max_probes,
            "built field registry"
        );
        Ok(registry)
    }

    /// Builder: register a field, replacing any other of the same type
    pub fn with_field(mut self, field: impl Into<Field>) -> Self {
        let field = field.into();
        self.fields.insert(field.field_type(), field);
        self
    }

    pub fn get(&self, field_type: DurationFieldType) -> Option<&Field> {
        self.fields.get(&field_type)
    }

    /// Like [`get`](Self::get), failing with `Unsupported` when absent
    pub fn field(&self, field_type: DurationFieldType) -> Result<&Field> {
        self.get(field_type).ok_or_else(|| {
            TemporalError::unsupported(format!("No duration field registered for {}", field_type))
        })
    }

    pub fn contains(&self, field_type: DurationFieldType) -> bool {
        self.fields.contains_key(&field_type)
    }

    /// Registered fields, shortest unit first
    pub fn fields(&self) -> Vec<&Field> {
        let mut fields: Vec<&Field> = self.fields.values().collect();
        fields.sort_by(|a, b| a.compare_unit(*b).then(a.field_type().cmp(&b.field_type())));
        fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
