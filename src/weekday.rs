use crate::arith::floor_mod;
use crate::consts::{DAYS_PER_WEEK, SATURDAY_OFFSET};
use crate::CalendarError;

/// Maps a Sunday-first weekday number (1 = Sunday .. 7 = Saturday) to the
/// Saturday-first numbering of the Persian week (1 = Shanbe .. 7 = Jom'e).
///
/// # Errors
/// Returns `CalendarError::InvalidWeekday` if `weekday` is not in `1..=7`.
pub const fn to_persian_weekday(weekday: u8) -> Result<u8, CalendarError> {
    match weekday {
        1..=6 => Ok(weekday + 1),
        7 => Ok(1),
        _ => Err(CalendarError::InvalidWeekday(weekday)),
    }
}

/// Saturday-first weekday number (1 = Shanbe .. 7 = Jom'e) of a Julian Day Number.
pub const fn weekday_of_julian_day(julian_day: i64) -> u8 {
    // JDN 0 is a Monday
    floor_mod(floor_mod(julian_day, DAYS_PER_WEEK) + SATURDAY_OFFSET, DAYS_PER_WEEK) as u8 + 1
}
