//! Civil date/time ⇄ epoch seconds.
//!
//! Both directions use era-based day counting over a calendar whose years
//! start on March 1st, so the leap day is the last day of the internal year
//! and no month-length table is needed. An era is 400 Gregorian years,
//! exactly 146097 days. Divisions that can see a negative dividend use
//! `div_euclid`/`rem_euclid`; every divisor is positive, so these floor.

use crate::civil::{CivilDateTime, Weekday};
use crate::error::InvalidInput;
use crate::validate::{SECS_PER_DAY, SECS_PER_HOUR, is_valid_epoch_seconds};

/// Days in a 400-year era.
const DAYS_PER_ERA: i64 = 146_097;

/// Days from 0000-03-01 to 1970-01-01.
const EPOCH_SHIFT_DAYS: i64 = 719_468;

/// Days since 1970-01-01 for an already-validated date.
pub(crate) fn days_from_civil(year: i32, month: i32, day: i32) -> i64 {
    let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT_DAYS
}

/// `(year, month, day)` for a day count since 1970-01-01.
///
/// Callers guarantee `days` comes from a valid epoch value, so the year fits
/// 0..=9999.
pub(crate) fn civil_from_days(days: i64) -> (i32, i32, i32) {
    let days = days + EPOCH_SHIFT_DAYS;
    let era = days.div_euclid(DAYS_PER_ERA);
    let day_of_era = days - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year as i32, month as i32, day as i32)
}

/// Converts a civil date/time to seconds since 1970-01-01T00:00:00Z.
///
/// # Errors
///
/// Returns [`InvalidInput::Date`] or [`InvalidInput::Time`] if `dt` is not a
/// valid date/time in years 0000..=9999.
///
/// # Example
///
/// ```
/// use utctime_calendar::{CivilDateTime, civil_to_epoch};
///
/// let secs = civil_to_epoch(CivilDateTime::new(2024, 1, 1, 0, 0, 0)).unwrap();
/// assert_eq!(secs, 1_704_067_200);
/// ```
pub fn civil_to_epoch(dt: CivilDateTime) -> Result<i64, InvalidInput> {
    let dt = dt.validate()?;
    let days = days_from_civil(dt.year, dt.month, dt.day);
    Ok(days * SECS_PER_DAY
        + i64::from(dt.hour) * SECS_PER_HOUR
        + i64::from(dt.minute) * 60
        + i64::from(dt.second))
}

/// Converts seconds since 1970-01-01T00:00:00Z to a civil date/time.
///
/// # Errors
///
/// Returns [`InvalidInput::EpochOutOfRange`] if `seconds` falls outside
/// years 0000..=9999.
///
/// # Example
///
/// ```
/// use utctime_calendar::{CivilDateTime, epoch_to_civil};
///
/// assert_eq!(epoch_to_civil(-1).unwrap(), CivilDateTime::new(1969, 12, 31, 23, 59, 59));
/// ```
pub fn epoch_to_civil(seconds: i64) -> Result<CivilDateTime, InvalidInput> {
    if !is_valid_epoch_seconds(seconds) {
        return Err(InvalidInput::EpochOutOfRange { seconds });
    }
    let days = seconds.div_euclid(SECS_PER_DAY);
    let secs_of_day = seconds.rem_euclid(SECS_PER_DAY);
    let (year, month, day) = civil_from_days(days);
    Ok(CivilDateTime {
        year,
        month,
        day,
        hour: (secs_of_day / SECS_PER_HOUR) as i32,
        minute: (secs_of_day % SECS_PER_HOUR / 60) as i32,
        second: (secs_of_day % 60) as i32,
    })
}

/// Returns the day of the week of `dt`.
///
/// # Errors
///
/// Returns [`InvalidInput`] if `dt` is not valid.
pub fn weekday(dt: CivilDateTime) -> Result<Weekday, InvalidInput> {
    let dt = dt.validate()?;
    Ok(Weekday::from_epoch_days(days_from_civil(
        dt.year, dt.month, dt.day,
    )))
}

/// Zero-based day of the year (0..=365) of a validated date.
pub(crate) fn ordinal0(year: i32, month: i32, day: i32) -> i32 {
    (days_from_civil(year, month, day) - days_from_civil(year, 1, 1)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{MAX_EPOCH_SECONDS, MIN_EPOCH_SECONDS};

    #[test]
    fn epoch_zero() {
        assert_eq!(epoch_to_civil(0).unwrap(), CivilDateTime::midnight(1970, 1, 1));
        assert_eq!(civil_to_epoch(CivilDateTime::midnight(1970, 1, 1)).unwrap(), 0);
    }

    #[test]
    fn lower_boundary() {
        let first = CivilDateTime::midnight(0, 1, 1);
        assert_eq!(civil_to_epoch(first).unwrap(), MIN_EPOCH_SECONDS);
        assert_eq!(epoch_to_civil(MIN_EPOCH_SECONDS).unwrap(), first);
    }

    #[test]
    fn upper_boundary() {
        let last = CivilDateTime::new(9999, 12, 31, 23, 59, 59);
        assert_eq!(civil_to_epoch(last).unwrap(), MAX_EPOCH_SECONDS);
        assert_eq!(epoch_to_civil(MAX_EPOCH_SECONDS).unwrap(), last);
    }

    #[test]
    fn out_of_range_epoch() {
        assert_eq!(
            epoch_to_civil(MIN_EPOCH_SECONDS - 1).unwrap_err(),
            InvalidInput::EpochOutOfRange {
                seconds: MIN_EPOCH_SECONDS - 1
            }
        );
        assert_eq!(
            epoch_to_civil(MAX_EPOCH_SECONDS + 1).unwrap_err(),
            InvalidInput::EpochOutOfRange {
                seconds: MAX_EPOCH_SECONDS + 1
            }
        );
        assert!(epoch_to_civil(i64::MIN).is_err());
        assert!(epoch_to_civil(i64::MAX).is_err());
    }

    #[test]
    fn known_timestamps() {
        // 2024-01-01 00:00:00 UTC
        assert_eq!(
            epoch_to_civil(1_704_067_200).unwrap(),
            CivilDateTime::midnight(2024, 1, 1)
        );
        // 2024-02-29 12:00:00 UTC
        assert_eq!(
            epoch_to_civil(1_709_208_000).unwrap(),
            CivilDateTime::new(2024, 2, 29, 12, 0, 0)
        );
        // 2000-01-01 00:00:00 UTC
        assert_eq!(
            civil_to_epoch(CivilDateTime::midnight(2000, 1, 1)).unwrap(),
            946_684_800
        );
        // 2038-01-19 03:14:07 UTC, the last 32-bit second
        assert_eq!(
            civil_to_epoch(CivilDateTime::new(2038, 1, 19, 3, 14, 7)).unwrap(),
            i64::from(i32::MAX)
        );
    }

    #[test]
    fn negative_epoch_floors() {
        assert_eq!(
            epoch_to_civil(-1).unwrap(),
            CivilDateTime::new(1969, 12, 31, 23, 59, 59)
        );
        assert_eq!(
            epoch_to_civil(-86_400).unwrap(),
            CivilDateTime::midnight(1969, 12, 31)
        );
        assert_eq!(
            epoch_to_civil(-86_401).unwrap(),
            CivilDateTime::new(1969, 12, 30, 23, 59, 59)
        );
    }

    #[test]
    fn year_zero_leap_day() {
        // Year 0000 is divisible by 400.
        let leap_day = CivilDateTime::midnight(0, 2, 29);
        let secs = civil_to_epoch(leap_day).unwrap();
        assert_eq!(secs, MIN_EPOCH_SECONDS + 59 * SECS_PER_DAY);
        assert_eq!(epoch_to_civil(secs).unwrap(), leap_day);
    }

    #[test]
    fn invalid_civil_rejected() {
        assert!(civil_to_epoch(CivilDateTime::midnight(2023, 2, 29)).is_err());
        assert!(civil_to_epoch(CivilDateTime::midnight(10000, 1, 1)).is_err());
        assert!(civil_to_epoch(CivilDateTime::midnight(-1, 12, 31)).is_err());
        assert!(civil_to_epoch(CivilDateTime::new(2000, 1, 1, 23, 59, 60)).is_err());
        assert!(civil_to_epoch(CivilDateTime::midnight(2000, 13, 1)).is_err());
    }

    #[test]
    fn days_from_civil_era_boundaries() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
        assert_eq!(days_from_civil(0, 3, 1), -EPOCH_SHIFT_DAYS);
        assert_eq!(civil_from_days(-EPOCH_SHIFT_DAYS), (0, 3, 1));
        assert_eq!(civil_from_days(-EPOCH_SHIFT_DAYS - 1), (0, 2, 29));
    }

    #[test]
    fn weekday_known_dates() {
        assert_eq!(
            weekday(CivilDateTime::midnight(1970, 1, 1)).unwrap(),
            Weekday::Thursday
        );
        assert_eq!(
            weekday(CivilDateTime::midnight(2024, 1, 1)).unwrap(),
            Weekday::Monday
        );
        assert_eq!(
            weekday(CivilDateTime::midnight(2000, 1, 1)).unwrap(),
            Weekday::Saturday
        );
        assert!(weekday(CivilDateTime::midnight(2000, 2, 30)).is_err());
    }

    #[test]
    fn ordinal0_counts_from_january_first() {
        assert_eq!(ordinal0(2023, 1, 1), 0);
        assert_eq!(ordinal0(2023, 12, 31), 364);
        assert_eq!(ordinal0(2024, 12, 31), 365);
        assert_eq!(ordinal0(2024, 3, 1), 60);
    }
}
