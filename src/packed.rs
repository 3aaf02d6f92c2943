use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_MASK, MONTH_SHIFT, YEAR_SHIFT};
use crate::{prelude::*, CalendarError, PersianDate};

/// A Persian date packed into a single integer.
///
/// The year occupies the bits above position 16, the month index bits 8–15 and
/// the day bits 0–7. The year is recovered with an arithmetic shift, so years
/// before the epoch survive packing. For valid dates the integer ordering is the
/// chronological ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PackedDate(i64);

impl PackedDate {
    /// Packs the given fields without validating them.
    pub const fn pack(year: i64, month: u8, day: u8) -> Self {
        Self((year << YEAR_SHIFT) | ((month as i64) << MONTH_SHIFT) | day as i64)
    }

    /// Returns the raw packed value
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Year field
    #[inline]
    pub const fn year(self) -> i64 {
        self.0 >> YEAR_SHIFT
    }

    /// Month field (0-indexed)
    #[inline]
    pub const fn month(self) -> u8 {
        ((self.0 >> MONTH_SHIFT) & FIELD_MASK) as u8
    }

    /// Day field
    #[inline]
    pub const fn day(self) -> u8 {
        (self.0 & FIELD_MASK) as u8
    }

    /// Unpacks into a validated [`PersianDate`].
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` or `CalendarError::InvalidDay` if the
    /// packed fields do not form a real date.
    pub fn unpack(self) -> Result<PersianDate, CalendarError> {
        PersianDate::new(self.year(), self.month(), self.day())
    }
}

impl From<PersianDate> for PackedDate {
    fn from(date: PersianDate) -> Self {
        Self::pack(date.year(), date.month(), date.day())
    }
}

impl TryFrom<PackedDate> for PersianDate {
    type Error = CalendarError;

    fn try_from(packed: PackedDate) -> Result<Self, Self::Error> {
        packed.unpack()
    }
}
