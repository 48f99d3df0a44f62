//! Range predicates for civil dates, times of day, and epoch seconds.

/// Seconds in one hour.
pub const SECS_PER_HOUR: i64 = 60 * 60;

/// Seconds in one UTC day (no leap seconds).
pub const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Epoch seconds of 0000-01-01T00:00:00Z.
pub const MIN_EPOCH_SECONDS: i64 = -62_167_219_200;

/// Epoch seconds of 9999-12-31T23:59:59Z.
pub const MAX_EPOCH_SECONDS: i64 = 253_402_300_799;

/// Smallest representable year.
pub const MIN_YEAR: i32 = 0;

/// Largest representable year.
pub const MAX_YEAR: i32 = 9999;

/// Returns `true` if `year` is a Gregorian leap year.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` of `year`, or `None` if `month` is
/// not in 1..=12.
pub fn days_in_month(year: i32, month: i32) -> Option<u8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Returns `true` if `year-month-day` is a proleptic Gregorian date in years
/// 0000..=9999.
pub fn is_valid_date(year: i32, month: i32, day: i32) -> bool {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) || day < 1 {
        return false;
    }
    match days_in_month(year, month) {
        Some(max_day) => day <= i32::from(max_day),
        None => false,
    }
}

/// Returns `true` if `hour:minute:second` is a time of day.
///
/// A second value of 60 is rejected: epoch seconds have no room for leap
/// seconds.
#[inline]
pub fn is_valid_time(hour: i32, minute: i32, second: i32) -> bool {
    (0..=23).contains(&hour) && (0..=59).contains(&minute) && (0..=59).contains(&second)
}

/// Returns `true` if `seconds` lies within
/// [`MIN_EPOCH_SECONDS`]..=[`MAX_EPOCH_SECONDS`].
#[inline]
pub fn is_valid_epoch_seconds(seconds: i64) -> bool {
    (MIN_EPOCH_SECONDS..=MAX_EPOCH_SECONDS).contains(&seconds)
}
