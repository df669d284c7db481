//! The duration field capability
//!
//! A duration field converts between a count of one calendrical unit and
//! milliseconds on the timeline. [`Field`] is the closed set of strategies:
//! precise fields divide by a constant, imprecise fields ask a chronology.

use crate::{ImpreciseDurationField, PreciseDurationField};
use std::cmp::Ordering;
use std::fmt;
use tempora_core::arith::safe_to_int;
use tempora_core::{DurationFieldType, Instant, Result};

/// Conversion rules for one unit
pub trait DurationField: Send + Sync + fmt::Debug {
    fn field_type(&self) -> DurationFieldType;

    /// `true` when every unit has the same length regardless of instant
    fn is_precise(&self) -> bool;

    /// Exact unit length for precise fields, an average for imprecise ones
    fn unit_millis(&self) -> i64;

    /// Whole units in `duration` measured from `instant`, truncated toward zero
    fn value_as_long(&self, duration: i64, instant: Instant) -> Result<i64>;

    /// Milliseconds spanned by `value` units starting at `instant`
    fn millis(&self, value: i64, instant: Instant) -> Result<i64>;

    /// `instant` advanced by `value` units
    fn add(&self, instant: Instant, value: i64) -> Result<Instant>;

    /// Whole units from `subtrahend` to `minuend`
    fn difference_as_long(&self, minuend: Instant, subtrahend: Instant) -> Result<i64>;

    fn name(&self) -> &'static str {
        self.field_type().name()
    }

    /// Like [`value_as_long`](Self::value_as_long), narrowed to `i32`
    fn value(&self, duration: i64, instant: Instant) -> Result<i32> {
        safe_to_int(self.value_as_long(duration, instant)?)
    }

    /// Like [`difference_as_long`](Self::difference_as_long), narrowed to `i32`
    fn difference(&self, minuend: Instant, subtrahend: Instant) -> Result<i32> {
        safe_to_int(self.difference_as_long(minuend, subtrahend)?)
    }

    /// Orders fields by unit length
    fn compare_unit(&self, other: &dyn DurationField) -> Ordering {
        self.unit_millis().cmp(&other.unit_millis())
    }
}

/// A duration field of either strategy
///
/// Fields of different strategies are never equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Precise(PreciseDurationField),
    Imprecise(ImpreciseDurationField),
}

impl Field {
    fn inner(&self) -> &dyn DurationField {
        match self {
            Field::Precise(f) => f,
            Field::Imprecise(f) => f,
        }
    }

    pub fn as_precise(&self) -> Option<&PreciseDurationField> {
        match self {
            Field::Precise(f) => Some(f),
            Field::Imprecise(_) => None,
        }
    }

    pub fn as_imprecise(&self) -> Option<&ImpreciseDurationField> {
        match self {
            Field::Precise(_) => None,
            Field::Imprecise(f) => Some(f),
        }
    }
}

impl DurationField for Field {
    fn field_type(&self) -> DurationFieldType {
        self.inner().field_type()
    }

    fn is_precise(&self) -> bool {
        self.inner().is_precise()
    }

    fn unit_millis(&self) -> i64 {
        self.inner().unit_millis()
    }

    fn value_as_long(&self, duration: i64, instant: Instant) -> Result<i64> {
        self.inner().value_as_long(duration, instant)
    }

    fn millis(&self, value: i64, instant: Instant) -> Result<i64> {
        self.inner().millis(value, instant)
    }

    fn add(&self, instant: Instant, value: i64) -> Result<Instant> {
        self.inner().add(instant, value)
    }

    fn difference_as_long(&self, minuend: Instant, subtrahend: Instant) -> Result<i64> {
        self.inner().difference_as_long(minuend, subtrahend)
    }
}

impl From<PreciseDurationField> for Field {
    fn from(f: PreciseDurationField) -> Self {
        Field::Precise(f)
    }
}

impl From<ImpreciseDurationField> for Field {
    fn from(f: ImpreciseDurationField) -> Self {
        Field::Imprecise(f)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DurationField[{}]", self.name())
    }
}
