//! Offset adjustment, differences, and comparison of civil date/times.

use std::cmp::Ordering;

use tracing::debug;

use crate::civil::CivilDateTime;
use crate::convert::{civil_to_epoch, epoch_to_civil};
use crate::error::InvalidInput;
use crate::validate::SECS_PER_DAY;

/// A signed whole-day count plus a signed seconds count.
///
/// Used as an arithmetic delta; `seconds` is not required to stay within a
/// single day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DayTimeOffset {
    /// Whole days.
    pub days: i64,
    /// Seconds, added after the days.
    pub seconds: i64,
}

impl DayTimeOffset {
    /// Creates an offset of `days` days plus `seconds` seconds.
    pub const fn new(days: i64, seconds: i64) -> Self {
        Self { days, seconds }
    }

    /// Total seconds, or `None` on 64-bit overflow.
    pub fn total_seconds(self) -> Option<i64> {
        self.days
            .checked_mul(SECS_PER_DAY)
            .and_then(|d| d.checked_add(self.seconds))
    }
}

/// Shifts `dt` by `day_offset` days plus `second_offset` seconds.
///
/// # Errors
///
/// Returns [`InvalidInput`] if `dt` is invalid, if the offset arithmetic
/// overflows 64 bits, or if the result falls outside years 0000..=9999. The
/// result is never wrapped or clamped.
///
/// # Example
///
/// ```
/// use utctime_calendar::{CivilDateTime, adjust};
///
/// let next = adjust(CivilDateTime::midnight(2000, 2, 28), 1, 0).unwrap();
/// assert_eq!(next, CivilDateTime::midnight(2000, 2, 29));
/// ```
pub fn adjust(
    dt: CivilDateTime,
    day_offset: i64,
    second_offset: i64,
) -> Result<CivilDateTime, InvalidInput> {
    adjust_by(dt, DayTimeOffset::new(day_offset, second_offset))
}

/// Shifts `dt` by `offset`. See [`adjust`].
///
/// # Errors
///
/// Same as [`adjust`].
pub fn adjust_by(dt: CivilDateTime, offset: DayTimeOffset) -> Result<CivilDateTime, InvalidInput> {
    let start = civil_to_epoch(dt)?;
    let shifted = offset
        .total_seconds()
        .and_then(|delta| start.checked_add(delta))
        .ok_or_else(|| {
            debug!(days = offset.days, seconds = offset.seconds, "adjust overflowed");
            InvalidInput::Overflow {
                operation: "adjust",
            }
        })?;
    epoch_to_civil(shifted).inspect_err(|_| {
        debug!(shifted, "adjusted time outside representable range");
    })
}

/// Returns the signed distance from `from` to `to` as `(days, seconds)`.
///
/// Both parts truncate toward zero and share the sign of the total, so
/// `days * 86400 + seconds` is the exact difference in seconds.
///
/// # Errors
///
/// Returns [`InvalidInput`] if either endpoint is invalid, or
/// [`InvalidInput::Overflow`] if the day count does not fit `i32`.
///
/// # Example
///
/// ```
/// use utctime_calendar::{CivilDateTime, difference};
///
/// let a = CivilDateTime::midnight(1970, 1, 2);
/// let b = CivilDateTime::new(1970, 1, 1, 12, 0, 0);
/// assert_eq!(difference(a, b).unwrap(), (0, -43_200));
/// ```
pub fn difference(from: CivilDateTime, to: CivilDateTime) -> Result<(i32, i32), InvalidInput> {
    let to_secs = civil_to_epoch(to)?;
    let from_secs = civil_to_epoch(from)?;
    let total = to_secs - from_secs;
    let days = total / SECS_PER_DAY;
    let seconds = total % SECS_PER_DAY;
    let days = i32::try_from(days).map_err(|_| {
        debug!(days, "day difference exceeds i32");
        InvalidInput::Overflow {
            operation: "difference",
        }
    })?;
    // |seconds| < 86400
    Ok((days, seconds as i32))
}

/// Compares two civil date/times on the linear time scale.
///
/// # Errors
///
/// Returns [`InvalidInput`] if either value is invalid.
pub fn compare(a: CivilDateTime, b: CivilDateTime) -> Result<Ordering, InvalidInput> {
    Ok(civil_to_epoch(a)?.cmp(&civil_to_epoch(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_one_day() {
        assert_eq!(
            adjust(CivilDateTime::midnight(1970, 1, 1), 1, 0).unwrap(),
            CivilDateTime::midnight(1970, 1, 2)
        );
    }

    #[test]
    fn adjust_into_leap_day() {
        assert_eq!(
            adjust(CivilDateTime::midnight(2000, 2, 28), 1, 0).unwrap(),
            CivilDateTime::midnight(2000, 2, 29)
        );
        assert_eq!(
            adjust(CivilDateTime::midnight(1900, 2, 28), 1, 0).unwrap(),
            CivilDateTime::midnight(1900, 3, 1)
        );
    }

    #[test]
    fn adjust_negative_seconds_cross_midnight() {
        assert_eq!(
            adjust(CivilDateTime::midnight(1970, 1, 1), 0, -1).unwrap(),
            CivilDateTime::new(1969, 12, 31, 23, 59, 59)
        );
    }

    #[test]
    fn adjust_mixed_signs() {
        assert_eq!(
            adjust(CivilDateTime::new(2024, 3, 1, 6, 0, 0), 1, -7 * 3600).unwrap(),
            CivilDateTime::new(2024, 3, 1, 23, 0, 0)
        );
    }

    #[test]
    fn adjust_past_year_9999_fails() {
        let last = CivilDateTime::new(9999, 12, 31, 23, 59, 59);
        assert_eq!(
            adjust(last, 0, 1).unwrap_err(),
            InvalidInput::EpochOutOfRange {
                seconds: 253_402_300_800
            }
        );
    }

    #[test]
    fn adjust_before_year_0_fails() {
        assert!(adjust(CivilDateTime::midnight(0, 1, 1), -1, 0).is_err());
    }

    #[test]
    fn adjust_extreme_offsets_overflow() {
        let dt = CivilDateTime::midnight(2000, 1, 1);
        let overflow = InvalidInput::Overflow {
            operation: "adjust",
        };
        assert_eq!(adjust(dt, i64::MAX, 0).unwrap_err(), overflow);
        assert_eq!(adjust(dt, i64::MIN, 0).unwrap_err(), overflow);
        assert_eq!(adjust(dt, 0, i64::MAX).unwrap_err(), overflow);
        // Day product fits, the addition of seconds does not.
        assert_eq!(adjust(dt, i64::MAX / SECS_PER_DAY, i64::MAX).unwrap_err(), overflow);
    }

    #[test]
    fn adjust_invalid_input_fails() {
        assert_eq!(
            adjust(CivilDateTime::midnight(2023, 2, 29), 0, 0).unwrap_err(),
            InvalidInput::Date {
                year: 2023,
                month: 2,
                day: 29,
            }
        );
    }

    #[test]
    fn offset_total_seconds() {
        assert_eq!(DayTimeOffset::new(2, -10).total_seconds(), Some(172_790));
        assert_eq!(DayTimeOffset::new(i64::MAX, 0).total_seconds(), None);
        assert_eq!(DayTimeOffset::default().total_seconds(), Some(0));
    }

    #[test]
    fn difference_one_day_both_ways() {
        let a = CivilDateTime::midnight(1970, 1, 1);
        let b = CivilDateTime::midnight(1970, 1, 2);
        assert_eq!(difference(a, b).unwrap(), (1, 0));
        assert_eq!(difference(b, a).unwrap(), (-1, 0));
    }

    #[test]
    fn difference_truncates_toward_zero() {
        let a = CivilDateTime::midnight(2000, 1, 1);
        let b = CivilDateTime::new(2000, 1, 3, 1, 0, 0);
        assert_eq!(difference(a, b).unwrap(), (2, 3600));
        assert_eq!(difference(b, a).unwrap(), (-2, -3600));
    }

    #[test]
    fn difference_full_range_fits_i32() {
        let first = CivilDateTime::midnight(0, 1, 1);
        let last = CivilDateTime::new(9999, 12, 31, 23, 59, 59);
        assert_eq!(difference(first, last).unwrap(), (3_652_424, 86_399));
        assert_eq!(difference(last, first).unwrap(), (-3_652_424, -86_399));
    }

    #[test]
    fn difference_invalid_endpoint() {
        let ok = CivilDateTime::midnight(2000, 1, 1);
        let bad = CivilDateTime::new(2000, 1, 1, 0, 0, 60);
        assert!(difference(ok, bad).is_err());
        assert!(difference(bad, ok).is_err());
    }

    #[test]
    fn compare_orders_by_time() {
        let a = CivilDateTime::new(1999, 12, 31, 23, 59, 59);
        let b = CivilDateTime::midnight(2000, 1, 1);
        assert_eq!(compare(a, b).unwrap(), Ordering::Less);
        assert_eq!(compare(b, a).unwrap(), Ordering::Greater);
        assert_eq!(compare(a, a).unwrap(), Ordering::Equal);
        assert!(compare(a, CivilDateTime::midnight(2000, 0, 1)).is_err());
    }
}
