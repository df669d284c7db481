//! Millisecond lengths of the standard units
//!
//! Month, year and century lengths are Gregorian averages over the 400-year
//! cycle; use them as estimates only.

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_HALFDAY: i64 = 12 * MILLIS_PER_HOUR;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;
pub const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;

/// 365.2425 days
pub const MILLIS_PER_YEAR: i64 = 31_556_952_000;
/// 30.436875 days
pub const MILLIS_PER_MONTH: i64 = MILLIS_PER_YEAR / 12;
pub const MILLIS_PER_CENTURY: i64 = 100 * MILLIS_PER_YEAR;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_averages() {
        assert_eq!(MILLIS_PER_MONTH, 2_629_746_000);
        assert_eq!(MILLIS_PER_YEAR % MILLIS_PER_MONTH, 0);
        assert_eq!(MILLIS_PER_YEAR, 146_097 * MILLIS_PER_DAY / 400);
    }
}
