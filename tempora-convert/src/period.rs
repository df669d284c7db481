//! ISO 8601 seconds-only periods - parse text like "PT72.345S"

use tempora_core::arith::{safe_add, safe_multiply, safe_negate};
use tempora_core::constants::MILLIS_PER_SECOND;
use tempora_core::{Result, TemporalError};

/// Parse `PT[-]seconds[.fraction]S` into milliseconds
///
/// `P`, `T` and `S` are case-insensitive. The fraction is padded or
/// truncated to three digits, so `PT1.5S` is 1500 and `PT0.0009S` is 0.
/// Seconds that do not fit in 64-bit milliseconds fail as arithmetic.
pub fn parse_iso_seconds(text: &str) -> Result<i64> {
    let invalid = || TemporalError::illegal_argument(format!("Invalid format: \"{}\"", text));

    let bytes = text.as_bytes();
    let len = bytes.len();
    if len < 4
        || !bytes[0].eq_ignore_ascii_case(&b'P')
        || !bytes[1].eq_ignore_ascii_case(&b'T')
        || !bytes[len - 1].eq_ignore_ascii_case(&b'S')
    {
        return Err(invalid());
    }
    let body = &text[2..len - 1];

    let (negative, unsigned) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
        return Err(invalid());
    }

    let seconds: i64 = whole.parse().map_err(|_| {
        TemporalError::arithmetic(format!("Seconds out of range: \"{}\"", text))
    })?;
    let millis = fraction
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(3)
        .fold(0i64, |acc, b| acc * 10 + (b - b'0') as i64);

    if negative {
        // Built from negative parts so i64::MIN stays reachable
        safe_add(safe_multiply(safe_negate(seconds)?, MILLIS_PER_SECOND)?, -millis)
    } else {
        safe_add(safe_multiply(seconds, MILLIS_PER_SECOND)?, millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempora_core::{Duration, ErrorKind};

    #[test]
    fn test_whole_seconds() {
        assert_eq!(parse_iso_seconds("PT0S").unwrap(), 0);
        assert_eq!(parse_iso_seconds("PT72S").unwrap(), 72_000);
        assert_eq!(parse_iso_seconds("pt72s").unwrap(), 72_000);
        assert_eq!(parse_iso_seconds("PT-5S").unwrap(), -5_000);
    }

    #[test]
    fn test_fraction_padding() {
        assert_eq!(parse_iso_seconds("PT72.345S").unwrap(), 72_345);
        assert_eq!(parse_iso_seconds("PT1.5S").unwrap(), 1_500);
        assert_eq!(parse_iso_seconds("PT1.S").unwrap(), 1_000);
        assert_eq!(parse_iso_seconds("PT0.0009S").unwrap(), 0);
        assert_eq!(parse_iso_seconds("PT-1.05S").unwrap(), -1_050);
    }

    #[test]
    fn test_invalid_format() {
        for text in [
            "", "PT", "PTS", "P1S", "PT1M", "T1S", "PT+1S", "PT-S", "PT.5S", "PT1.2.3S", "PT 1S",
            "PT1,5S", "PT--1S", "PT1-S",
        ] {
            let err = parse_iso_seconds(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::IllegalArgument, "{:?}", text);
        }
        let err = parse_iso_seconds("PTxS").unwrap_err();
        assert_eq!(err.to_string(), "Illegal argument: Invalid format: \"PTxS\"");
    }

    #[test]
    fn test_out_of_range() {
        let err = parse_iso_seconds("PT99999999999999999999S").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
        let err = parse_iso_seconds("PT9223372036854776S").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
    }

    #[test]
    fn test_extremes_match_display() {
        for millis in [i64::MIN, i64::MAX, -1, 999, 60_000] {
            let text = Duration::from_millis(millis).to_string();
            assert_eq!(parse_iso_seconds(&text).unwrap(), millis, "{}", text);
        }
    }
}
