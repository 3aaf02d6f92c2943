/// Division rounding toward negative infinity.
///
/// # Panics
/// Panics if `divisor` is zero, or on overflow for `i64::MIN` divided by `-1`.
#[inline]
pub const fn floor_div(dividend: i64, divisor: i64) -> i64 {
    let quotient = dividend / divisor;
    if dividend % divisor != 0 && ((dividend < 0) != (divisor < 0)) {
        quotient - 1
    } else {
        quotient
    }
}

/// Remainder carrying the sign of `divisor`, so it lies in `[0, divisor)` for a
/// positive divisor whatever the sign of `dividend`.
///
/// # Panics
/// Panics if `divisor` is zero, or on overflow for `i64::MIN` divided by `-1`.
#[inline]
pub const fn floor_mod(dividend: i64, divisor: i64) -> i64 {
    let rem = dividend % divisor;
    if rem != 0 && ((rem < 0) != (divisor < 0)) {
        rem + divisor
    } else {
        rem
    }
}

/// Division rounding toward positive infinity.
///
/// # Panics
/// Panics if `divisor` is zero, or on overflow for `i64::MIN` divided by `-1`.
#[inline]
pub const fn ceil_div(dividend: i64, divisor: i64) -> i64 {
    let quotient = dividend / divisor;
    if dividend % divisor != 0 && ((dividend < 0) == (divisor < 0)) {
        quotient + 1
    } else {
        quotient
    }
}
