//! Base-10 digit helpers.
//!
//! All functions work on the magnitude of the value, the sign never contributes a digit.

/// Number of base-10 digits in the magnitude of `value`, `0` counts as one digit.
#[inline]
pub fn num_digits(value: i64) -> u32 {
    match value.unsigned_abs().checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

/// Digit at `position` in the magnitude of `value`, position 0 is the least significant one.
///
/// Positions beyond the largest power of ten representable in `u64` always yield 0.
#[inline]
pub fn get_digit(value: i64, position: u32) -> u8 {
    match 10u64.checked_pow(position) {
        Some(scale) => ((value.unsigned_abs() / scale) % 10) as u8,
        None => 0,
    }
}

/// Number of digit passes needed so that every key in `[min, max]` is fully covered.
#[inline]
pub fn digit_passes(min: i64, max: i64) -> u32 {
    num_digits(min).max(num_digits(max))
}
