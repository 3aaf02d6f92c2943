use crate::consts::{DAYS_IN_MONTH, ESFAND, ESFAND_DAYS_LEAP, MAX_MONTH, MEHR};
use crate::leap::is_leap_year;
use crate::CalendarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month index guaranteed to be in the range `0..=MAX_MONTH` (0..=11).
/// Farvardin is 0 and Esfand is 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    /// Creates a new Month, validating that it's <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is > `MAX_MONTH`.
    pub const fn new(value: u8) -> Result<Self, CalendarError> {
        if value > MAX_MONTH {
            return Err(CalendarError::InvalidMonth(value));
        }
        Ok(Self(value))
    }

    /// Returns the month index as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of month, guaranteed to be valid for a given year and month when built
/// through [`Day::new`].
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if the value is 0 or too large for the
    /// given year and month, and `CalendarError::InvalidMonth` if the month is.
    pub fn new(value: u8, year: i64, month: u8) -> Result<Self, CalendarError> {
        let month = Month::new(month)?;
        let invalid = CalendarError::InvalidDay {
            year,
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or(invalid)?;
        if value > days_in_month(year, month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Without year/month context only the absolute bounds can be checked
        let invalid = CalendarError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or(invalid)?;
        if value > DAYS_IN_MONTH[0] {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Number of days in `month` of the Persian `year`.
pub fn days_in_month(year: i64, month: Month) -> u8 {
    if month.get() == ESFAND && is_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[usize::from(month.get())]
    }
}

/// Number of days in the Persian `year`: 366 for leap years, 365 otherwise.
pub fn days_in_year(year: i64) -> u16 {
    DAYS_IN_MONTH
        .iter()
        .map(|&days| u16::from(days))
        .sum::<u16>()
        + u16::from(is_leap_year(year))
}

/// Offset in days of the first day of `month` from the start of its year.
pub(crate) const fn month_offset(month: u8) -> i64 {
    let index = month as i64;
    if month > MEHR {
        30 * index + 6
    } else {
        31 * index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 0..=11 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid_too_large() {
        let result = Month::new(12);
        assert!(matches!(result, Err(CalendarError::InvalidMonth(12))));

        let result = Month::new(255);
        assert!(matches!(result, Err(CalendarError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_try_from_u8() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(month.get(), 8);

        let result: Result<Month, _> = 12.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_into_u8() {
        let month = Month::new(8).unwrap();
        let value: u8 = month.into();
        assert_eq!(value, 8);
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        assert!(serde_json::from_str::<Month>("12").is_err());
    }

    #[test]
    fn test_day_new_valid() {
        // Farvardin - 31 days
        assert!(Day::new(1, 1403, 0).is_ok());
        assert!(Day::new(31, 1403, 0).is_ok());

        // Mehr - 30 days
        assert!(Day::new(30, 1403, 6).is_ok());
        assert!(Day::new(31, 1403, 6).is_err());

        // Esfand non-leap - 29 days
        assert!(Day::new(29, 1374, 11).is_ok());
        assert!(Day::new(30, 1374, 11).is_err());

        // Esfand leap year - 30 days
        assert!(Day::new(30, 1375, 11).is_ok());
        assert!(Day::new(31, 1375, 11).is_err());
    }

    #[test]
    fn test_day_new_invalid_zero() {
        let result = Day::new(0, 1403, 0);
        assert!(matches!(result, Err(CalendarError::InvalidDay { .. })));
    }

    #[test]
    fn test_day_new_invalid_too_large() {
        let result = Day::new(32, 1403, 0);
        assert!(matches!(
            result,
            Err(CalendarError::InvalidDay {
                year: 1403,
                month: 0,
                day: 32
            })
        ));
    }

    #[test]
    fn test_day_new_invalid_month() {
        let result = Day::new(1, 1403, 12);
        assert!(matches!(result, Err(CalendarError::InvalidMonth(12))));
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Day, _> = 32.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_day_serde() {
        let day = Day::new(15, 1403, 8).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "15");

        let parsed: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);
    }

    #[test]
    fn test_days_in_month_31_day_months() {
        for month in 0..=5 {
            let month = Month::new(month).unwrap();
            assert_eq!(days_in_month(1403, month), 31, "Month {month} should have 31 days");
        }
    }

    #[test]
    fn test_days_in_month_30_day_months() {
        for month in 6..=10 {
            let month = Month::new(month).unwrap();
            assert_eq!(days_in_month(1403, month), 30, "Month {month} should have 30 days");
        }
    }

    #[test]
    fn test_days_in_month_esfand() {
        let esfand = Month::new(ESFAND).unwrap();
        assert_eq!(days_in_month(1374, esfand), 29);
        assert_eq!(days_in_month(1375, esfand), 30);
        assert_eq!(days_in_month(-1, esfand), if is_leap_year(-1) { 30 } else { 29 });
        assert_eq!(days_in_month(i64::MIN, esfand), 29);
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(1374), 365);
        assert_eq!(days_in_year(1375), 366);
    }

    #[test]
    fn test_month_offset() {
        let mut expected = 0;
        for month in 0..=MAX_MONTH {
            assert_eq!(month_offset(month), expected, "Month {month}");
            expected += i64::from(DAYS_IN_MONTH[usize::from(month)]);
        }
    }
}
