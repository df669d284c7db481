//! Standard duration converters, one per input shape

use crate::period::parse_iso_seconds;
use crate::{Converter, ConverterMeta, DurationConverter};
use tempora_core::arith::safe_subtract;
use tempora_core::{Result, TemporalError, Value, ValueType};

// ============ Long ============

/// A raw 64-bit count is already milliseconds
pub struct LongConverter;

static LONG_EXAMPLES: [&str; 2] = ["Long(5000) → 5000", "Long(-1) → -1"];

impl Converter for LongConverter {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            name: "long",
            accepts: ValueType::Long,
            description: "Interpret a 64-bit integer as milliseconds",
            examples: &LONG_EXAMPLES,
        }
    }
}

impl DurationConverter for LongConverter {
    fn duration_millis(&self, value: &Value) -> Result<i64> {
        self.check_input(value)?;
        match value {
            Value::Long(n) => Ok(*n),
            other => Err(TemporalError::type_mismatch("Long", other.type_name())),
        }
    }
}

// ============ Duration ============

/// Anything already carrying a millisecond length
pub struct ReadableDurationConverter;

static READABLE_EXAMPLES: [&str; 1] = ["Duration(PT72.345S) → 72345"];

impl Converter for ReadableDurationConverter {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            name: "readable_duration",
            accepts: ValueType::Duration,
            description: "Read the length of a Duration",
            examples: &READABLE_EXAMPLES,
        }
    }
}

impl DurationConverter for ReadableDurationConverter {
    fn duration_millis(&self, value: &Value) -> Result<i64> {
        self.check_input(value)?;
        match value {
            Value::Duration(d) => Ok(d.millis()),
            other => Err(TemporalError::type_mismatch("Duration", other.type_name())),
        }
    }
}

// ============ std::time::Duration ============

/// Truncates sub-millisecond precision; lengths past `i64::MAX` millis overflow
pub struct StdDurationConverter;

static STD_EXAMPLES: [&str; 2] = ["1.5s → 1500", "999µs → 0"];

impl Converter for StdDurationConverter {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            name: "std_duration",
            accepts: ValueType::StdDuration,
            description: "Convert a std::time::Duration to whole milliseconds",
            examples: &STD_EXAMPLES,
        }
    }
}

impl DurationConverter for StdDurationConverter {
    fn duration_millis(&self, value: &Value) -> Result<i64> {
        self.check_input(value)?;
        match value {
            Value::StdDuration(d) => i64::try_from(d.as_millis()).map_err(|_| {
                TemporalError::arithmetic(format!("Duration of {}ms exceeds 64 bits", d.as_millis()))
            }),
            other => Err(TemporalError::type_mismatch("StdDuration", other.type_name())),
        }
    }
}

// ============ Interval ============

/// Length of a span between two instants
pub struct IntervalConverter;

static INTERVAL_EXAMPLES: [&str; 1] = ["Interval { start: 1000, end: 4500 } → 3500"];

impl Converter for IntervalConverter {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            name: "interval",
            accepts: ValueType::Interval,
            description: "Measure the length of an interval",
            examples: &INTERVAL_EXAMPLES,
        }
    }
}

impl DurationConverter for IntervalConverter {
    fn duration_millis(&self, value: &Value) -> Result<i64> {
        self.check_input(value)?;
        match value {
            Value::Interval { start, end } => {
                if end < start {
                    return Err(TemporalError::illegal_argument(format!(
                        "The end instant {} must be greater or equal to the start {}",
                        end, start
                    )));
                }
                safe_subtract(*end, *start)
            }
            other => Err(TemporalError::type_mismatch("Interval", other.type_name())),
        }
    }
}

// ============ ISO text ============

/// Parses seconds-only ISO 8601 text, the form `Duration` displays as
pub struct IsoPeriodConverter;

static ISO_EXAMPLES: [&str; 3] = ["\"PT72.345S\" → 72345", "\"PT-1S\" → -1000", "\"P1D\" → error"];

impl Converter for IsoPeriodConverter {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            name: "iso_period",
            accepts: ValueType::Text,
            description: "Parse PT[-]seconds[.millis]S text",
            examples: &ISO_EXAMPLES,
        }
    }
}

impl DurationConverter for IsoPeriodConverter {
    fn duration_millis(&self, value: &Value) -> Result<i64> {
        self.check_input(value)?;
        match value {
            Value::Text(text) => parse_iso_seconds(text),
            other => Err(TemporalError::type_mismatch("Text", other.type_name())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempora_core::{Duration, ErrorKind};

    #[test]
    fn test_long() {
        assert_eq!(LongConverter.duration_millis(&Value::Long(5000)).unwrap(), 5000);
        assert_eq!(LongConverter.duration_millis(&Value::Long(i64::MIN)).unwrap(), i64::MIN);
    }

    #[test]
    fn test_readable_duration() {
        let value = Value::from(Duration::from_millis(72_345));
        assert_eq!(ReadableDurationConverter.duration_millis(&value).unwrap(), 72_345);
    }

    #[test]
    fn test_std_duration_truncates() {
        let value = Value::from(std::time::Duration::from_micros(1_500_999));
        assert_eq!(StdDurationConverter.duration_millis(&value).unwrap(), 1_500);

        let huge = Value::from(std::time::Duration::from_secs(u64::MAX));
        let err = StdDurationConverter.duration_millis(&huge).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
    }

    #[test]
    fn test_interval() {
        let value = Value::Interval { start: 1000, end: 4500 };
        assert_eq!(IntervalConverter.duration_millis(&value).unwrap(), 3500);

        let empty = Value::Interval { start: 7, end: 7 };
        assert_eq!(IntervalConverter.duration_millis(&empty).unwrap(), 0);

        let reversed = Value::Interval { start: 10, end: 5 };
        let err = IntervalConverter.duration_millis(&reversed).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalArgument);

        let wide = Value::Interval { start: i64::MIN, end: i64::MAX };
        let err = IntervalConverter.duration_millis(&wide).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
    }

    #[test]
    fn test_iso_text() {
        let value = Value::from("PT72.345S");
        assert_eq!(IsoPeriodConverter.duration_millis(&value).unwrap(), 72_345);
        let err = IsoPeriodConverter.duration_millis(&Value::from("P1D")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalArgument);
    }

    #[test]
    fn test_null_is_illegal_argument() {
        let err = LongConverter.duration_millis(&Value::Null).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalArgument);
        let err = IsoPeriodConverter.duration_millis(&Value::from(None::<i64>)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalArgument);
    }

    #[test]
    fn test_wrong_shape_is_type_mismatch() {
        let err = LongConverter.duration_millis(&Value::from("PT1S")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.to_string(), "Type mismatch: expected Long, got Text");

        let err = IntervalConverter.duration_millis(&Value::Bool(true)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_meta() {
        assert_eq!(LongConverter.supported_type(), ValueType::Long);
        assert_eq!(IsoPeriodConverter.supported_type(), ValueType::Text);
        assert_eq!(StdDurationConverter.meta().name, "std_duration");
    }
}
