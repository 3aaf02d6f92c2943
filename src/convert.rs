use crate::arith::{ceil_div, floor_div, floor_mod};
use crate::consts::{
    CYCLE_ANCHOR_YEAR, EPOCH, FARVARDIN, FIRST_HALF_DAYS, GRAND_CYCLE_DAYS, GRAND_CYCLE_YEARS,
    LEAP_DAYS_BIAS, LEAP_DENOMINATOR, LEAP_NUMERATOR, MAX_YEAR, MIN_DAY, MIN_YEAR,
    YEAR_DECODE_BIAS, YEAR_DECODE_DENOMINATOR,
};
use crate::normalize::normalize;
use crate::packed::PackedDate;
use crate::types::month_offset;
use crate::{CalendarError, PersianDate};

const DAYS_PER_COMMON_YEAR: i64 = 365;

/// Julian Day Number of 1 Farvardin `MIN_YEAR`
pub const MIN_JULIAN_DAY: i64 = julian_day_of(MIN_YEAR, FARVARDIN, MIN_DAY);
/// Julian Day Number of the last day of `MAX_YEAR`
pub const MAX_JULIAN_DAY: i64 = julian_day_of(MAX_YEAR + 1, FARVARDIN, MIN_DAY) - 1;

/// Grand-cycle formula for an already canonical (year, month, day).
pub(crate) const fn julian_day_of(year: i64, month: u8, day: u8) -> i64 {
    let a = year - CYCLE_ANCHOR_YEAR;
    let b = floor_mod(a, GRAND_CYCLE_YEARS) + CYCLE_ANCHOR_YEAR;
    (EPOCH - 1)
        + GRAND_CYCLE_DAYS * floor_div(a, GRAND_CYCLE_YEARS)
        + DAYS_PER_COMMON_YEAR * (b - 1)
        + floor_div(LEAP_NUMERATOR * b - LEAP_DAYS_BIAS, LEAP_DENOMINATOR)
        + month_offset(month)
        + day as i64
}

/// Returns the Julian Day Number of the given Persian date.
///
/// `month` (0-indexed) and `day` may be out of range: the triple goes through
/// [`normalize`] first, so `pj(1403, 12, 1) == pj(1404, 0, 1)`.
///
/// # Errors
/// Fails with the errors of [`normalize`]: a non-positive `day` or a year outside
/// `MIN_YEAR..=MAX_YEAR`.
pub fn pj(year: i64, month: i64, day: i64) -> Result<i64, CalendarError> {
    let date = normalize(year, month, day)?;
    Ok(julian_day_of(date.year(), date.month(), date.day()))
}

/// Returns the Persian date of a Julian Day Number, packed into a [`PackedDate`].
///
/// # Errors
/// Returns `CalendarError::JulianDayOutOfRange` if `julian_day` lies outside
/// `MIN_JULIAN_DAY..=MAX_JULIAN_DAY`.
pub fn jp(julian_day: i64) -> Result<PackedDate, CalendarError> {
    to_persian(julian_day).map(PackedDate::from)
}

pub(crate) fn to_persian(julian_day: i64) -> Result<PersianDate, CalendarError> {
    if !(MIN_JULIAN_DAY..=MAX_JULIAN_DAY).contains(&julian_day) {
        return Err(CalendarError::JulianDayOutOfRange(julian_day));
    }

    // Locate the grand cycle, then the year within it
    let a = julian_day - pj(CYCLE_ANCHOR_YEAR + 1, 0, 1)?;
    let b = floor_div(a, GRAND_CYCLE_DAYS);
    let c = floor_mod(a, GRAND_CYCLE_DAYS);
    // Last day of a cycle would decode one year short
    let d = if c == GRAND_CYCLE_DAYS - 1 {
        GRAND_CYCLE_YEARS
    } else {
        floor_div(LEAP_DENOMINATOR * c + YEAR_DECODE_BIAS, YEAR_DECODE_DENOMINATOR)
    };
    let year = CYCLE_ANCHOR_YEAR + GRAND_CYCLE_YEARS * b + d;

    // 1-based day of year
    let f = (1 + julian_day) - pj(year, 0, 1)?;
    let month = if f > FIRST_HALF_DAYS {
        ceil_div(f - 6, 30) - 1
    } else {
        ceil_div(f, 31) - 1
    };
    let day = julian_day - (pj(year, month, 1)? - 1);

    // month is in 0..=11 and day in 1..=31 here
    PersianDate::new(year, month as u8, day as u8)
}
