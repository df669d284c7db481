//! Tempora Convert - Duration converters
//!
//! Turns externally supplied values into milliseconds:
//! - `Converter` / `DurationConverter`: one implementation per input shape
//! - `ConverterRegistry`: picks the converter for a [`Value`](tempora_core::Value)
//!
//! A missing value is an illegal argument; an unrecognised shape is a
//! type mismatch.

mod converters;
mod period;
mod registry;
mod traits;

pub use converters::{
    IntervalConverter, IsoPeriodConverter, LongConverter, ReadableDurationConverter,
    StdDurationConverter,
};
pub use period::parse_iso_seconds;
pub use registry::ConverterRegistry;
pub use traits::{Converter, ConverterMeta, DurationConverter};

/// Re-export core types for converter authors
pub mod prelude {
    pub use crate::{Converter, ConverterMeta, ConverterRegistry, DurationConverter};
    pub use tempora_core::prelude::*;
    pub use tempora_core::{Result, ValueType};
}
