//! Calendar rules consulted by imprecise fields
//!
//! A [`Chronology`] answers the questions that depend on where an instant
//! falls in the calendar: how far N months from here lands, and how many
//! whole months separate two instants. [`IsoChronology`] is the proleptic
//! Gregorian calendar in UTC.

use std::fmt;
use tempora_core::arith::{safe_add, safe_divide, safe_multiply, safe_negate, safe_subtract};
use tempora_core::constants::{
    MILLIS_PER_DAY, MILLIS_PER_HALFDAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
    MILLIS_PER_WEEK,
};
use tempora_core::{DurationFieldType, Instant, Result, TemporalError};

/// External calendar authority
///
/// Implementations must be pure functions of their arguments.
pub trait Chronology: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// `instant` advanced by `value` units of `unit`
    fn add(&self, instant: Instant, unit: DurationFieldType, value: i64) -> Result<Instant>;

    /// Whole units of `unit` from `subtrahend` to `minuend`
    fn difference(
        &self,
        minuend: Instant,
        subtrahend: Instant,
        unit: DurationFieldType,
    ) -> Result<i64>;
}

// ============================================================================
// IsoChronology
// ============================================================================

/// Days from 0000-03-01 to 1970-01-01
const UNIX_EPOCH_DAYS: i64 = 719_468;

/// Comfortably outside the years reachable from an `i64` millisecond instant
const MAX_ABS_YEAR: i64 = 300_000_000;

/// Proleptic Gregorian calendar, UTC, no leap seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsoChronology;

impl IsoChronology {
    /// Fixed-length units; everything else is month based or unsupported
    fn precise_unit_millis(unit: DurationFieldType) -> Option<i64> {
        match unit {
            DurationFieldType::MILLIS => Some(1),
            DurationFieldType::SECONDS => Some(MILLIS_PER_SECOND),
            DurationFieldType::MINUTES => Some(MILLIS_PER_MINUTE),
            DurationFieldType::HOURS => Some(MILLIS_PER_HOUR),
            DurationFieldType::HALFDAYS => Some(MILLIS_PER_HALFDAY),
            DurationFieldType::DAYS => Some(MILLIS_PER_DAY),
            DurationFieldType::WEEKS => Some(MILLIS_PER_WEEK),
            _ => None,
        }
    }

    fn months_per_unit(unit: DurationFieldType) -> Result<i64> {
        match unit {
            DurationFieldType::MONTHS => Ok(1),
            DurationFieldType::YEARS => Ok(12),
            DurationFieldType::CENTURIES => Ok(1_200),
            other => Err(TemporalError::unsupported(format!(
                "{} are not supported by the ISO chronology",
                other
            ))),
        }
    }

    /// Adds calendar months, clamping the day to the target month's length
    /// and keeping the time of day.
    pub fn add_months(&self, instant: Instant, months: i64) -> Result<Instant> {
        if months == 0 {
            return Ok(instant);
        }
        let days = instant.div_euclid(MILLIS_PER_DAY);
        let time_of_day = instant.rem_euclid(MILLIS_PER_DAY);
        let (year, month, day) = civil_from_days(days);

        let total = safe_add(safe_multiply(year, 12)?, month as i64 - 1)?;
        let total = safe_add(total, months)?;
        let new_year = total.div_euclid(12);
        let new_month = (total.rem_euclid(12) + 1) as u32;
        if new_year.abs() > MAX_ABS_YEAR {
            return Err(TemporalError::arithmetic(format!(
                "Year {} is outside the supported range",
                new_year
            )));
        }
        let new_day = day.min(days_in_month(new_year, new_month));

        let new_days = days_from_civil(new_year, new_month, new_day);
        safe_add(safe_multiply(new_days, MILLIS_PER_DAY)?, time_of_day)
    }

    /// Whole months from `subtrahend` to `minuend`
    pub fn months_between(&self, minuend: Instant, subtrahend: Instant) -> Result<i64> {
        if minuend < subtrahend {
            return safe_negate(self.months_between(subtrahend, minuend)?);
        }
        let (y1, m1, _) = civil_from_days(minuend.div_euclid(MILLIS_PER_DAY));
        let (y2, m2, _) = civil_from_days(subtrahend.div_euclid(MILLIS_PER_DAY));
        let mut months = (y1 - y2) * 12 + (m1 as i64 - m2 as i64);

        // Landing in the minuend's month may still overshoot it by day or time
        if months > 0 {
            let overshoots = match self.add_months(subtrahend, months) {
                Ok(landed) => landed > minuend,
                Err(e) if e.is_arithmetic() => true,
                Err(e) => return Err(e),
            };
            if overshoots {
                months -= 1;
            }
        }
        Ok(months)
    }
}

impl Chronology for IsoChronology {
    fn name(&self) -> &str {
        "ISO"
    }

    fn add(&self, instant: Instant, unit: DurationFieldType, value: i64) -> Result<Instant> {
        if let Some(unit_millis) = Self::precise_unit_millis(unit) {
            return safe_add(instant, safe_multiply(value, unit_millis)?);
        }
        let months = safe_multiply(value, Self::months_per_unit(unit)?)?;
        self.add_months(instant, months)
    }

    fn difference(
        &self,
        minuend: Instant,
        subtrahend: Instant,
        unit: DurationFieldType,
    ) -> Result<i64> {
        if let Some(unit_millis) = Self::precise_unit_millis(unit) {
            return safe_divide(safe_subtract(minuend, subtrahend)?, unit_millis);
        }
        let per_unit = Self::months_per_unit(unit)?;
        safe_divide(self.months_between(minuend, subtrahend)?, per_unit)
    }
}

// ============================================================================
// Civil calendar helpers
// ============================================================================

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Days since 1970-01-01 for a civil date
/// Algorithm from Howard Hinnant: http://howardhinnant.github.io/date_algorithms.html
pub fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400; // [0, 399]
    let m = month as i64;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - UNIX_EPOCH_DAYS
}

/// Civil date for days since 1970-01-01
pub fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + UNIX_EPOCH_DAYS;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32; // [1, 31]
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32; // [1, 12]
    let year = if m <= 2 { y + 1 } else { y };
    (year, m, d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempora_core::ErrorKind;

    fn ymd(year: i64, month: u32, day: u32) -> Instant {
        days_from_civil(year, month, day) * MILLIS_PER_DAY
    }

    #[test]
    fn test_civil_anchors() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(ymd(2000, 1, 1), 946_684_800_000);
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
        assert_eq!(civil_from_days(19_723), (2024, 1, 1));
        assert_eq!(civil_from_days(days_from_civil(-4713, 11, 24)), (-4713, 11, 24));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 4), 30);
    }

    #[test]
    fn test_add_months_clamps_day() {
        let chrono = IsoChronology;
        let jan31 = ymd(2024, 1, 31) + 3_600_000;
        let feb = chrono.add(jan31, DurationFieldType::MONTHS, 1).unwrap();
        assert_eq!(feb, ymd(2024, 2, 29) + 3_600_000);

        let back = chrono.add(ymd(2024, 3, 31), DurationFieldType::MONTHS, -1).unwrap();
        assert_eq!(back, ymd(2024, 2, 29));

        let leap = chrono.add(ymd(2024, 2, 29), DurationFieldType::YEARS, 1).unwrap();
        assert_eq!(leap, ymd(2025, 2, 28));
    }

    #[test]
    fn test_add_before_epoch() {
        let chrono = IsoChronology;
        let t = ymd(1969, 12, 15) + 1;
        assert_eq!(chrono.add(t, DurationFieldType::MONTHS, 1).unwrap(), ymd(1970, 1, 15) + 1);
        assert_eq!(
            chrono.add(t, DurationFieldType::CENTURIES, -1).unwrap(),
            ymd(1869, 12, 15) + 1
        );
    }

    #[test]
    fn test_add_precise_units() {
        let chrono = IsoChronology;
        assert_eq!(chrono.add(0, DurationFieldType::WEEKS, 2).unwrap(), 2 * MILLIS_PER_WEEK);
        assert_eq!(chrono.add(10, DurationFieldType::MILLIS, -10).unwrap(), 0);
        assert!(chrono.add(i64::MAX, DurationFieldType::SECONDS, 1).is_err());
    }

    #[test]
    fn test_add_out_of_range() {
        let chrono = IsoChronology;
        let err = chrono.add(0, DurationFieldType::YEARS, 400_000_000).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
        let err = chrono.add(0, DurationFieldType::MONTHS, i64::MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
        let err = chrono.add(0, DurationFieldType::YEARS, 292_278_995).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
    }

    #[test]
    fn test_unsupported_units() {
        let chrono = IsoChronology;
        let err = chrono.add(0, DurationFieldType::ERAS, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
        let err = chrono.difference(0, 0, DurationFieldType::WEEKYEARS).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
    }

    #[test]
    fn test_months_between() {
        let chrono = IsoChronology;
        assert_eq!(chrono.months_between(ymd(2024, 3, 15), ymd(2024, 1, 15)).unwrap(), 2);
        assert_eq!(chrono.months_between(ymd(2024, 3, 14), ymd(2024, 1, 15)).unwrap(), 1);
        assert_eq!(chrono.months_between(ymd(2024, 1, 15), ymd(2024, 3, 15)).unwrap(), -2);
        assert_eq!(chrono.months_between(ymd(2024, 2, 29), ymd(2024, 1, 31)).unwrap(), 1);
        assert_eq!(chrono.months_between(ymd(2024, 1, 31), ymd(2024, 1, 1)).unwrap(), 0);
    }

    #[test]
    fn test_difference_years() {
        let chrono = IsoChronology;
        let d = chrono
            .difference(ymd(2025, 2, 28), ymd(2024, 2, 29), DurationFieldType::YEARS)
            .unwrap();
        assert_eq!(d, 1);
        let d = chrono
            .difference(ymd(2025, 2, 27), ymd(2024, 2, 29), DurationFieldType::YEARS)
            .unwrap();
        assert_eq!(d, 0);
        let d = chrono
            .difference(ymd(1900, 6, 1), ymd(2024, 6, 1), DurationFieldType::CENTURIES)
            .unwrap();
        assert_eq!(d, -1);
    }

    #[test]
    fn test_difference_precise() {
        let chrono = IsoChronology;
        let d = chrono.difference(ymd(2024, 3, 1), ymd(2024, 2, 1), DurationFieldType::DAYS);
        assert_eq!(d.unwrap(), 29);
    }
}
