//! Fields whose unit length depends on the instant
//!
//! A month is 28 to 31 days, a year 365 or 366. Adding delegates to the
//! chronology. Counting units starts from an estimate based on the average
//! unit length and corrects it with `add` probes until
//! `add(subtrahend, n) <= minuend < add(subtrahend, n + 1)`.
//!
//! For the Gregorian calendar the estimate is off by at most one unit, so
//! refinement converges within three probes. The probe budget only matters
//! for chronologies whose unit lengths stray far from the average; once it
//! is spent the chronology's own `difference` answers.

use crate::{Chronology, DurationField, FieldConfig};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tempora_core::arith::{safe_add, safe_negate, safe_subtract};
use tempora_core::{DurationFieldType, Instant, Result, TemporalError};
use tracing::debug;

/// Duration field backed by calendar rules
#[derive(Clone)]
pub struct ImpreciseDurationField {
    field_type: DurationFieldType,
    unit_millis: i64,
    chronology: Arc<dyn Chronology>,
    max_probes: u32,
}

impl ImpreciseDurationField {
    /// `average_unit_millis` must be positive; it seeds estimates only
    pub fn new(
        field_type: DurationFieldType,
        average_unit_millis: i64,
        chronology: Arc<dyn Chronology>,
    ) -> Result<Self> {
        if average_unit_millis <= 0 {
            return Err(TemporalError::illegal_argument(format!(
                "The average unit milliseconds of {} must be positive, got {}",
                field_type, average_unit_millis
            )));
        }
        Ok(Self {
            field_type,
            unit_millis: average_unit_millis,
            chronology,
            max_probes: FieldConfig::default().max_probes,
        })
    }

    /// Builder: apply tunables from a config
    pub fn with_config(mut self, config: &FieldConfig) -> Self {
        self.max_probes = config.max_probes.max(1);
        self
    }

    pub fn chronology(&self) -> &Arc<dyn Chronology> {
        &self.chronology
    }

    pub fn max_probes(&self) -> u32 {
        self.max_probes
    }

    /// Walks the average-based estimate to the exact count. `None` when the
    /// probe budget runs out first. Requires `minuend >= subtrahend`.
    fn refine(&self, minuend: Instant, subtrahend: Instant) -> Result<Option<i64>> {
        let elapsed = safe_subtract(minuend, subtrahend)?;
        let mut estimate = elapsed / self.unit_millis;
        let mut probes = 1;

        // An unrepresentable first probe can only be an overshoot
        let undershoot = match self.add(subtrahend, estimate) {
            Ok(reached) => reached <= minuend,
            Err(e) if e.is_arithmetic() => false,
            Err(e) => return Err(e),
        };

        if undershoot {
            loop {
                if probes >= self.max_probes {
                    return Ok(None);
                }
                let next = safe_add(estimate, 1)?;
                probes += 1;
                match self.add(subtrahend, next) {
                    Ok(reached) if reached > minuend => return Ok(Some(estimate)),
                    Ok(_) => estimate = next,
                    // Unrepresentable, hence beyond any valid minuend
                    Err(e) if e.is_arithmetic() => return Ok(Some(estimate)),
                    Err(e) => return Err(e),
                }
            }
        }

        loop {
            if probes >= self.max_probes {
                return Ok(None);
            }
            estimate = safe_subtract(estimate, 1)?;
            probes += 1;
            match self.add(subtrahend, estimate) {
                Ok(reached) if reached <= minuend => return Ok(Some(estimate)),
                Ok(_) => {}
                Err(e) if e.is_arithmetic() => {}
                Err(e) => return Err(e),
            }
        }
    }
}

impl DurationField for ImpreciseDurationField {
    fn field_type(&self) -> DurationFieldType {
        self.field_type
    }

    fn is_precise(&self) -> bool {
        false
    }

    fn unit_millis(&self) -> i64 {
        self.unit_millis
    }

    fn value_as_long(&self, duration: i64, instant: Instant) -> Result<i64> {
        let end = safe_add(instant, duration)?;
        self.difference_as_long(end, instant)
    }

    fn millis(&self, value: i64, instant: Instant) -> Result<i64> {
        let end = self.add(instant, value)?;
        safe_subtract(end, instant)
    }

    fn add(&self, instant: Instant, value: i64) -> Result<Instant> {
        self.chronology.add(instant, self.field_type, value)
    }

    fn difference_as_long(&self, minuend: Instant, subtrahend: Instant) -> Result<i64> {
        if minuend < subtrahend {
            return safe_negate(self.difference_as_long(subtrahend, minuend)?);
        }
        match self.refine(minuend, subtrahend)? {
            Some(units) => Ok(units),
            None => {
                debug!(
                    field = self.field_type.name(),
                    chronology = self.chronology.name(),
                    max_probes = self.max_probes,
                    "probe budget exhausted, deferring to chronology difference"
                );
                self.chronology.difference(minuend, subtrahend, self.field_type)
            }
        }
    }
}

impl PartialEq for ImpreciseDurationField {
    fn eq(&self, other: &Self) -> bool {
        self.field_type == other.field_type
    }
}

impl Eq for ImpreciseDurationField {}

impl Hash for ImpreciseDurationField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field_type.hash_code().hash(state);
    }
}

impl fmt::Debug for ImpreciseDurationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImpreciseDurationField")
            .field("field_type", &self.field_type)
            .field("unit_millis", &self.unit_millis)
            .field("chronology", &self.chronology.name())
            .field("max_probes", &self.max_probes)
            .finish()
    }
}

impl fmt::Display for ImpreciseDurationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DurationField[{}]", self.field_type)
    }
}
