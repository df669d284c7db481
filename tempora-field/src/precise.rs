//! Fields with a fixed unit length
//!
//! Seconds, minutes, hours and (in UTC) days always span the same number of
//! milliseconds, so every operation is plain checked arithmetic and the
//! instant argument is ignored.

use crate::DurationField;
use std::fmt;
use std::hash::{Hash, Hasher};
use tempora_core::arith::{safe_add, safe_divide, safe_multiply, safe_subtract};
use tempora_core::{DurationFieldType, Instant, Result, TemporalError};

/// Duration field with a constant unit length in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreciseDurationField {
    field_type: DurationFieldType,
    unit_millis: i64,
}

impl PreciseDurationField {
    /// Fails with `IllegalArgument` unless `unit_millis` is positive
    pub fn new(field_type: DurationFieldType, unit_millis: i64) -> Result<Self> {
        if unit_millis <= 0 {
            return Err(TemporalError::illegal_argument(format!(
                "The unit milliseconds of {} must be positive, got {}",
                field_type, unit_millis
            )));
        }
        Ok(Self { field_type, unit_millis })
    }

    /// The one-millisecond field
    pub fn millis_field() -> Self {
        Self { field_type: DurationFieldType::MILLIS, unit_millis: 1 }
    }

    /// Upper and lower halves of the unit length folded together, plus the
    /// type's hash. Equal fields produce equal codes.
    pub fn hash_code(&self) -> i32 {
        let millis = self.unit_millis;
        let folded = (millis ^ ((millis as u64) >> 32) as i64) as i32;
        folded.wrapping_add(self.field_type.hash_code())
    }
}

impl DurationField for PreciseDurationField {
    fn field_type(&self) -> DurationFieldType {
        self.field_type
    }

    fn is_precise(&self) -> bool {
        true
    }

    fn unit_millis(&self) -> i64 {
        self.unit_millis
    }

    fn value_as_long(&self, duration: i64, _instant: Instant) -> Result<i64> {
        safe_divide(duration, self.unit_millis)
    }

    fn millis(&self, value: i64, _instant: Instant) -> Result<i64> {
        safe_multiply(value, self.unit_millis)
    }

    fn add(&self, instant: Instant, value: i64) -> Result<Instant> {
        let addition = safe_multiply(value, self.unit_millis)?;
        safe_add(instant, addition)
    }

    fn difference_as_long(&self, minuend: Instant, subtrahend: Instant) -> Result<i64> {
        let difference = safe_subtract(minuend, subtrahend)?;
        safe_divide(difference, self.unit_millis)
    }
}

impl Hash for PreciseDurationField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_code().hash(state);
    }
}

impl fmt::Display for PreciseDurationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DurationField[{}]", self.field_type)
    }
}
