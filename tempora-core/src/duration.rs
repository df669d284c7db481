//! Signed millisecond durations
//!
//! Unlike an instant, a [`Duration`] is not anchored to the timeline. It is
//! always an exact millisecond count, so only the precise units (up to
//! days of 24 hours) can build one.

use crate::arith::{safe_add, safe_divide, safe_multiply, safe_negate, safe_subtract};
use crate::constants::{MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An exact span of milliseconds, positive or negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration {
    millis: i64,
}

impl Duration {
    pub const ZERO: Duration = Duration { millis: 0 };

    // ========== Construction ==========

    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Days of exactly 24 hours
    pub fn standard_days(days: i64) -> Result<Self> {
        Ok(Self::from_millis(safe_multiply(days, MILLIS_PER_DAY)?))
    }

    pub fn standard_hours(hours: i64) -> Result<Self> {
        Ok(Self::from_millis(safe_multiply(hours, MILLIS_PER_HOUR)?))
    }

    pub fn standard_minutes(minutes: i64) -> Result<Self> {
        Ok(Self::from_millis(safe_multiply(minutes, MILLIS_PER_MINUTE)?))
    }

    pub fn standard_seconds(seconds: i64) -> Result<Self> {
        Ok(Self::from_millis(safe_multiply(seconds, MILLIS_PER_SECOND)?))
    }

    // ========== Accessors ==========

    pub fn millis(&self) -> i64 {
        self.millis
    }

    /// Whole seconds, truncated toward zero
    pub fn standard_seconds_part(&self) -> i64 {
        self.millis / MILLIS_PER_SECOND
    }

    /// Whole 24-hour days, truncated toward zero
    pub fn standard_days_part(&self) -> i64 {
        self.millis / MILLIS_PER_DAY
    }

    pub fn is_zero(&self) -> bool {
        self.millis == 0
    }

    pub fn is_negative(&self) -> bool {
        self.millis < 0
    }

    // ========== Arithmetic ==========

    pub fn plus(&self, other: Duration) -> Result<Self> {
        Ok(Self::from_millis(safe_add(self.millis, other.millis)?))
    }

    pub fn minus(&self, other: Duration) -> Result<Self> {
        Ok(Self::from_millis(safe_subtract(self.millis, other.millis)?))
    }

    pub fn negated(&self) -> Result<Self> {
        Ok(Self::from_millis(safe_negate(self.millis)?))
    }

    pub fn multiplied_by(&self, scalar: i64) -> Result<Self> {
        Ok(Self::from_millis(safe_multiply(self.millis, scalar)?))
    }

    /// Truncates toward zero
    pub fn divided_by(&self, divisor: i64) -> Result<Self> {
        Ok(Self::from_millis(safe_divide(self.millis, divisor)?))
    }
}

impl From<i64> for Duration {
    fn from(millis: i64) -> Self {
        Self::from_millis(millis)
    }
}

/// ISO 8601 seconds form: `PT72.345S`, `PT1S`, `PT-0.005S`
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.millis < 0 { "-" } else { "" };
        let abs = self.millis.unsigned_abs();
        let (secs, frac) = (abs / 1000, abs % 1000);
        if frac == 0 {
            write!(f, "PT{}{}S", sign, secs)
        } else {
            write!(f, "PT{}{}.{:03}S", sign, secs, frac)
        }
    }
}
