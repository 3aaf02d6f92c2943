mod arith;
mod consts;
mod convert;
mod leap;
mod normalize;
mod packed;
mod prelude;
mod types;
mod weekday;

pub use arith::{ceil_div, floor_div, floor_mod};
pub use consts::*;
pub use convert::{jp, pj, MAX_JULIAN_DAY, MIN_JULIAN_DAY};
pub use leap::{is_leap_year, is_leap_year_uncached, leap_cache, LeapCache};
pub use normalize::normalize;
pub use packed::PackedDate;
pub use types::{days_in_month, days_in_year, Day, Month};
pub use weekday::{to_persian_weekday, weekday_of_julian_day};

use serde::{Deserialize, Serialize};
use types::month_offset;

/// A civil date in the Persian (Jalali) solar calendar.
///
/// Months are 0-indexed (Farvardin is 0, Esfand is 11). Dates order
/// chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPersianDate")]
pub struct PersianDate {
    year: i64,
    month: Month,
    day: Day,
}

/// Error type for calendar operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Month index outside `0..=MAX_MONTH`.
    #[error("Invalid month: {0} (must be 0-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day outside the length of its month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i64, month: u8, day: u8 },

    /// Deficient day handed to the normalizer, which only rolls days forward.
    #[error("Cannot normalize non-positive day {0}")]
    NonPositiveDay(i64),

    /// Year outside `MIN_YEAR..=MAX_YEAR`.
    #[error("Year {0} is outside the supported range {min}..={max}", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(i64),

    /// Julian Day Number outside `MIN_JULIAN_DAY..=MAX_JULIAN_DAY`.
    #[error(
        "Julian day {0} is outside the supported range {min}..={max}",
        min = MIN_JULIAN_DAY,
        max = MAX_JULIAN_DAY
    )]
    JulianDayOutOfRange(i64),

    /// Weekday number outside `1..=7`.
    #[error("Invalid weekday: {0} (must be 1-7)")]
    InvalidWeekday(u8),
}

impl PersianDate {
    /// Creates a date from in-range fields, without any rolling.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange`, `CalendarError::InvalidMonth` or
    /// `CalendarError::InvalidDay` for fields outside their ranges.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, CalendarError> {
        normalize::check_year(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month.get())?;
        Ok(Self::from_parts(year, month, day))
    }

    /// Creates a date from possibly out-of-range fields, rolling them into place
    /// the way [`normalize`] does.
    ///
    /// # Errors
    /// See [`normalize`].
    pub fn normalized(year: i64, month: i64, day: i64) -> Result<Self, CalendarError> {
        normalize(year, month, day)
    }

    /// Returns the date of a Julian Day Number.
    ///
    /// # Errors
    /// Returns `CalendarError::JulianDayOutOfRange` outside
    /// `MIN_JULIAN_DAY..=MAX_JULIAN_DAY`.
    pub fn from_julian_day(julian_day: i64) -> Result<Self, CalendarError> {
        convert::to_persian(julian_day)
    }

    pub(crate) const fn from_parts(year: i64, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Returns the Julian Day Number of this date
    pub const fn to_julian_day(&self) -> i64 {
        convert::julian_day_of(self.year, self.month.get(), self.day.get())
    }

    /// Returns the year component
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month index (0-indexed, as u8 for convenience)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (as u8 for convenience)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Checks if this date falls in a leap year
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// 1-based position of this date within its year
    pub const fn day_of_year(&self) -> u16 {
        // month_offset is at most 336
        month_offset(self.month.get()) as u16 + self.day.get() as u16
    }

    /// Saturday-first weekday number (1 = Shanbe .. 7 = Jom'e)
    pub fn weekday(&self) -> u8 {
        weekday_of_julian_day(self.to_julian_day())
    }

    /// Packs this date into the single-integer layout
    pub fn pack(&self) -> PackedDate {
        PackedDate::from(*self)
    }
}

/// Unvalidated serde shape of [`PersianDate`].
#[derive(Deserialize)]
struct RawPersianDate {
    year: i64,
    month: u8,
    day: u8,
}

impl TryFrom<RawPersianDate> for PersianDate {
    type Error = CalendarError;

    fn try_from(raw: RawPersianDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}
