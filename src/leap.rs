use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::arith::floor_mod;
use crate::consts::{
    CYCLE_ANCHOR_YEAR, GRAND_CYCLE_YEARS, LEAP_CACHE_LEN, LEAP_CACHE_START, LEAP_DENOMINATOR,
    LEAP_NUMERATOR, LEAP_OFFSET,
};

/// Leap status of `year` computed straight from the 2820-year cycle rule.
///
/// Defined for every `i64`: the year is reduced into the cycle before the
/// anchor is subtracted.
pub const fn is_leap_year_uncached(year: i64) -> bool {
    let a = floor_mod(year, GRAND_CYCLE_YEARS) - CYCLE_ANCHOR_YEAR;
    let b = floor_mod(a, GRAND_CYCLE_YEARS) + CYCLE_ANCHOR_YEAR;
    floor_mod((b + LEAP_OFFSET) * LEAP_NUMERATOR, LEAP_DENOMINATOR) < LEAP_NUMERATOR
}

/// Precomputed leap status for the contiguous years `start..start + len`.
///
/// Immutable once built. Lookups outside the covered range fall back to
/// [`is_leap_year_uncached`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeapCache {
    start: i64,
    flags: Box<[bool]>,
}

impl LeapCache {
    /// Builds a cache covering `len` years starting at `start`.
    ///
    /// The range is truncated at `i64::MAX`, so `len()` may come out smaller
    /// than `len`.
    pub fn new(start: i64, len: usize) -> Self {
        let flags: Box<[bool]> = (0..len)
            .map_while(|offset| start.checked_add(i64::try_from(offset).ok()?))
            .map(is_leap_year_uncached)
            .collect();
        debug!(
            start,
            len = flags.len(),
            leap_years = flags.iter().filter(|&&leap| leap).count(),
            "built leap-year cache"
        );
        Self { start, flags }
    }

    /// First cached year
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Number of cached years
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if the cache covers no year at all
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Checks if `year` falls inside the cached range
    pub fn contains(&self, year: i64) -> bool {
        self.get(year).is_some()
    }

    /// Cached leap status of `year`, or `None` outside the cached range.
    pub fn get(&self, year: i64) -> Option<bool> {
        let offset = year.checked_sub(self.start)?;
        let index = usize::try_from(offset).ok()?;
        self.flags.get(index).copied()
    }

    /// Leap status of `year`, served from the cache when possible.
    pub fn is_leap_year(&self, year: i64) -> bool {
        self.get(year).unwrap_or_else(|| {
            trace!(year, "leap-year lookup outside cache range");
            is_leap_year_uncached(year)
        })
    }
}

impl Default for LeapCache {
    fn default() -> Self {
        Self::new(LEAP_CACHE_START, LEAP_CACHE_LEN)
    }
}

/// The process-wide leap cache.
///
/// Built on first use, exactly once, and shared read-only afterwards.
pub fn leap_cache() -> &'static LeapCache {
    static CACHE: OnceLock<LeapCache> = OnceLock::new();
    CACHE.get_or_init(LeapCache::default)
}

/// Determines if `year` is a leap year in the Persian calendar.
///
/// Any year is accepted: years outside the cached range are computed directly.
pub fn is_leap_year(year: i64) -> bool {
    leap_cache().is_leap_year(year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GRAND_CYCLE_DAYS;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i64,
            is_leap: bool,
        }

        let cases = [
            TestCase { year: 1, is_leap: false },
            TestCase { year: 4, is_leap: true },
            TestCase { year: 5, is_leap: false },
            TestCase { year: 1370, is_leap: true },
            TestCase { year: 1374, is_leap: false },
            TestCase { year: 1375, is_leap: true },
            TestCase { year: 1387, is_leap: true },
            TestCase { year: 1388, is_leap: false },
            TestCase { year: 1402, is_leap: false },
            TestCase { year: 1403, is_leap: false },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {}: expected {}",
                case.year,
                if case.is_leap { "leap year" } else { "not leap year" }
            );
            assert_eq!(is_leap_year_uncached(case.year), case.is_leap);
        }
    }

    #[test]
    fn test_cache_matches_formula() {
        let cache = leap_cache();
        assert_eq!(cache.start(), LEAP_CACHE_START);
        assert_eq!(cache.len(), LEAP_CACHE_LEN);
        for year in LEAP_CACHE_START..LEAP_CACHE_START + 2048 {
            assert_eq!(cache.get(year), Some(is_leap_year_uncached(year)), "Year {year}");
        }
    }

    #[test]
    fn test_cache_bounds() {
        let cache = LeapCache::new(10, 5);
        assert!(!cache.contains(9));
        assert!(cache.contains(10));
        assert!(cache.contains(14));
        assert!(!cache.contains(15));
        assert_eq!(cache.get(i64::MIN), None);
        assert_eq!(cache.get(i64::MAX), None);
    }

    #[test]
    fn test_cache_truncated_at_end_of_i64() {
        let cache = LeapCache::new(i64::MAX, 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(i64::MAX));
        assert_eq!(cache.get(i64::MAX), Some(is_leap_year_uncached(i64::MAX)));

        let cache = LeapCache::new(i64::MAX - 1, 5);
        assert_eq!(cache.len(), 2);
        assert!(cache.contains(i64::MAX - 1));
        assert!(cache.contains(i64::MAX));
    }

    #[test]
    fn test_extreme_years() {
        for year in [i64::MIN, i64::MIN + 473, i64::MAX] {
            let reduced = floor_mod(year, GRAND_CYCLE_YEARS);
            assert_eq!(is_leap_year(year), is_leap_year_uncached(reduced), "Year {year}");
        }
        assert!(!is_leap_year(i64::MIN));
        assert!(!is_leap_year(i64::MAX));
    }

    #[test]
    fn test_out_of_range_falls_back_to_formula() {
        let cache = LeapCache::new(1, 4);
        for year in [-5000, -1, 0, 5, 1375, 1_000_000] {
            assert_eq!(cache.is_leap_year(year), is_leap_year_uncached(year));
        }
    }

    #[test]
    fn test_empty_cache() {
        let cache = LeapCache::new(1, 0);
        assert!(cache.is_empty());
        assert_eq!(cache.get(1), None);
        assert!(cache.is_leap_year(1375));
    }

    #[test]
    fn test_pattern_repeats_every_grand_cycle() {
        for year in -3000..3000 {
            assert_eq!(
                is_leap_year_uncached(year),
                is_leap_year_uncached(year + GRAND_CYCLE_YEARS),
                "Year {year}"
            );
        }
    }

    #[test]
    fn test_grand_cycle_leap_count() {
        let leap_years = (1..=GRAND_CYCLE_YEARS)
            .filter(|&year| is_leap_year_uncached(year))
            .count();
        assert_eq!(leap_years, 683);
        let days = GRAND_CYCLE_YEARS * 365 + i64::try_from(leap_years).unwrap();
        assert_eq!(days, GRAND_CYCLE_DAYS);
    }
}
