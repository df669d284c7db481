//! Tempora Core - Fundamental types
//!
//! This crate provides the core types used throughout Tempora:
//! - `arith`: overflow-checked integer arithmetic
//! - `DurationFieldType`: opaque unit tokens (seconds, months, ...)
//! - `Duration`: an exact signed millisecond span
//! - `Value`: externally supplied inputs for duration conversion
//! - `TemporalError`: the error taxonomy shared by every crate

pub mod arith;
pub mod constants;
mod duration;
mod error;
mod field_type;
mod value;

pub use duration::Duration;
pub use error::{codes, ErrorKind, Result, TemporalError};
pub use field_type::DurationFieldType;
pub use value::{Value, ValueType};

/// Milliseconds since 1970-01-01T00:00:00Z
pub type Instant = i64;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::arith::{safe_add, safe_multiply, safe_negate, safe_subtract};
    pub use crate::{Duration, DurationFieldType, ErrorKind, Instant, TemporalError, Value};
}
