use crate::arith::{floor_div, floor_mod};
use crate::consts::{
    DAYS_IN_MONTH, ESFAND, ESFAND_DAYS_LEAP, FARVARDIN, MAX_YEAR, MIN_DAY, MIN_YEAR,
    MONTHS_PER_YEAR,
};
use crate::leap::is_leap_year;
use crate::types::{Day, Month};
use crate::{CalendarError, PersianDate};

/// Rewrites a possibly out-of-range (year, month, day) triple into its canonical
/// form.
///
/// Months roll into the year first, with floor semantics, so month `-1` is Esfand
/// of the previous year. Excess days then roll forward one month at a time,
/// honoring the length of Esfand in each year crossed. For example
/// `(1387, 20, 85)` becomes `(1388, 10, 25)`.
///
/// # Errors
/// Returns `CalendarError::NonPositiveDay` if `day` is 0 or negative, and
/// `CalendarError::YearOutOfRange` if the resulting year leaves
/// `MIN_YEAR..=MAX_YEAR`.
pub fn normalize(year: i64, month: i64, day: i64) -> Result<PersianDate, CalendarError> {
    if day < i64::from(MIN_DAY) {
        return Err(CalendarError::NonPositiveDay(day));
    }

    // first adjusting month...
    let mut year = year
        .checked_add(floor_div(month, MONTHS_PER_YEAR))
        .ok_or(CalendarError::YearOutOfRange(year))?;
    check_year(year)?;
    let mut month = floor_mod(month, MONTHS_PER_YEAR) as usize;
    let mut day = day;

    // ...then rolling excess days through the months of the adjusted year
    let mut month_lengths = DAYS_IN_MONTH;
    month_lengths[usize::from(ESFAND)] = esfand_days(year);

    while day > i64::from(month_lengths[month]) {
        day -= i64::from(month_lengths[month]);
        month += 1;
        if month >= month_lengths.len() {
            year += 1;
            check_year(year)?;
            month = usize::from(FARVARDIN);
            month_lengths[usize::from(ESFAND)] = esfand_days(year);
        }
    }

    // The loop leaves month < 12 and 1 <= day <= 31
    let month = Month::new(month as u8)?;
    let day = Day::new(day as u8, year, month.get())?;
    Ok(PersianDate::from_parts(year, month, day))
}

pub(crate) fn check_year(year: i64) -> Result<(), CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange(year));
    }
    Ok(())
}

fn esfand_days(year: i64) -> u8 {
    if is_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[usize::from(ESFAND)]
    }
}
