/// Julian Day Number of 1 Farvardin, year 1 (the Persian epoch)
pub const EPOCH: i64 = 1_948_321;

/// Number of months in a Persian year
pub const MONTHS_PER_YEAR: i64 = 12;

/// Maximum valid month index (Esfand); months are 0-indexed
pub const MAX_MONTH: u8 = 11;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month index for Farvardin
pub const FARVARDIN: u8 = 0;
/// Month index for Mehr, the first 30-day month
pub const MEHR: u8 = 6;
/// Month index for Esfand
pub const ESFAND: u8 = 11;

/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Maximum days in each month (months are 0-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 12] = [
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_leap_year check)
];

/// Length of the grand cycle, in years
pub const GRAND_CYCLE_YEARS: i64 = 2820;
/// Length of the grand cycle, in days
pub const GRAND_CYCLE_DAYS: i64 = 1_029_983;

/// Year the grand-cycle arithmetic is anchored on
pub(crate) const CYCLE_ANCHOR_YEAR: i64 = 474;
/// Leap rule: `((b + 38) * 682) mod 2816 < 682`
pub(crate) const LEAP_OFFSET: i64 = 38;
pub(crate) const LEAP_NUMERATOR: i64 = 682;
pub(crate) const LEAP_DENOMINATOR: i64 = 2816;
/// Accumulated leap days: `(682 * b - 110) div 2816`
pub(crate) const LEAP_DAYS_BIAS: i64 = 110;
/// Year-in-cycle decoding: `(2816 * c + 1031337) div 1028522`
pub(crate) const YEAR_DECODE_BIAS: i64 = 1_031_337;
pub(crate) const YEAR_DECODE_DENOMINATOR: i64 = 1_028_522;
/// Day count of the first six (31-day) months
pub(crate) const FIRST_HALF_DAYS: i64 = 186;

/// First year whose leap status is cached
pub const LEAP_CACHE_START: i64 = 1;
/// Number of consecutive years held by the leap cache
pub const LEAP_CACHE_LEN: usize = 2048;

/// Smallest supported Persian year
pub const MIN_YEAR: i64 = -(1 << 40);
/// Largest supported Persian year
pub const MAX_YEAR: i64 = 1 << 40;

/// Bit position of the year field in a packed date
pub const YEAR_SHIFT: u32 = 16;
/// Bit position of the month field in a packed date
pub const MONTH_SHIFT: u32 = 8;
/// Mask applied to the month and day fields of a packed date
pub const FIELD_MASK: i64 = 0xFF;

/// Number of days in a week
pub(crate) const DAYS_PER_WEEK: i64 = 7;
/// Shifts a Julian Day Number so that Saturday lands on 0
pub(crate) const SATURDAY_OFFSET: i64 = 2;
