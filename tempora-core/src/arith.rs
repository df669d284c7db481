//! Overflow-checked integer arithmetic
//!
//! Every date computation above this layer funnels through these functions.
//! They never wrap, saturate or panic: a result that does not fit in the
//! target width is reported as [`TemporalError::Arithmetic`].

use crate::error::{Result, TemporalError};

// ========== 64-bit ==========

/// Negates the input, failing for `i64::MIN`
pub fn safe_negate(value: i64) -> Result<i64> {
    value
        .checked_neg()
        .ok_or_else(|| TemporalError::arithmetic(format!("{} cannot be negated", value)))
}

/// Adds two values, failing on overflow
pub fn safe_add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b).ok_or_else(|| TemporalError::overflow("+", a, b))
}

/// Subtracts `b` from `a`, failing on overflow
pub fn safe_subtract(a: i64, b: i64) -> Result<i64> {
    a.checked_sub(b).ok_or_else(|| TemporalError::overflow("-", a, b))
}

/// Multiplies two values, failing on overflow
pub fn safe_multiply(a: i64, b: i64) -> Result<i64> {
    a.checked_mul(b).ok_or_else(|| TemporalError::overflow("*", a, b))
}

/// Divides, failing on a zero divisor and on `i64::MIN / -1`
pub fn safe_divide(dividend: i64, divisor: i64) -> Result<i64> {
    if divisor == 0 {
        return Err(TemporalError::arithmetic(format!("{} / 0: division by zero", dividend)));
    }
    dividend
        .checked_div(divisor)
        .ok_or_else(|| TemporalError::overflow("/", dividend, divisor))
}

// ========== 32-bit ==========

/// Narrows to `i32`, failing when out of range
pub fn safe_to_int(value: i64) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| TemporalError::arithmetic(format!("Value cannot fit in an int: {}", value)))
}

pub fn safe_add_int(a: i32, b: i32) -> Result<i32> {
    a.checked_add(b)
        .ok_or_else(|| TemporalError::overflow("+", a as i64, b as i64))
}

/// Multiplies in 64 bits then narrows to `i32`
pub fn safe_multiply_to_int(a: i64, b: i64) -> Result<i32> {
    safe_to_int(safe_multiply(a, b)?)
}

// ========== Bounds ==========

/// Checks that `value` lies in `[lower, upper]`
pub fn verify_value_bounds(field: &str, value: i64, lower: i64, upper: i64) -> Result<()> {
    if value < lower || value > upper {
        return Err(TemporalError::illegal_field_value(field, value, lower, upper));
    }
    Ok(())
}

/// Wraps `value` into the inclusive range `[min, max]`
///
/// `wrapped_value(13, 1, 12) == 1`, `wrapped_value(0, 1, 12) == 12`.
pub fn wrapped_value(value: i64, min: i64, max: i64) -> Result<i64> {
    if min >= max {
        return Err(TemporalError::illegal_argument(format!(
            "MIN > MAX: {} >= {}",
            min, max
        )));
    }
    let span = safe_add(safe_subtract(max, min)?, 1)?;
    let offset = safe_subtract(value, min)?;
    Ok(offset.rem_euclid(span) + min)
}
