//! Civil date and time of day in UTC.

use std::fmt;

use crate::error::InvalidInput;
use crate::validate::{is_valid_date, is_valid_time};

/// A UTC calendar date and time of day, second precision.
///
/// Fields are public and unchecked: a value is typically assembled while
/// parsing untrusted input, before it is known to be valid. Use
/// [`CivilDateTime::is_valid`] or [`CivilDateTime::validate`] to check it;
/// every conversion in this crate validates before computing.
///
/// Ordering is lexicographic over `(year, month, day, hour, minute, second)`,
/// which is chronological for valid values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime {
    /// Year, 0..=9999.
    pub year: i32,
    /// Month, 1..=12.
    pub month: i32,
    /// Day of month, 1..=31.
    pub day: i32,
    /// Hour, 0..=23.
    pub hour: i32,
    /// Minute, 0..=59.
    pub minute: i32,
    /// Second, 0..=59.
    pub second: i32,
}

impl CivilDateTime {
    /// Creates a value from its six fields without validating them.
    pub const fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Creates midnight at the start of `year-month-day`, unvalidated.
    pub const fn midnight(year: i32, month: i32, day: i32) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Returns `true` if both the date and the time of day are in range.
    pub fn is_valid(&self) -> bool {
        is_valid_date(self.year, self.month, self.day)
            && is_valid_time(self.hour, self.minute, self.second)
    }

    /// Returns `self` if valid.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::Date`] if the date is not a Gregorian date in
    /// years 0000..=9999, or [`InvalidInput::Time`] if the time of day is out
    /// of range.
    pub fn validate(self) -> Result<Self, InvalidInput> {
        if !is_valid_date(self.year, self.month, self.day) {
            return Err(InvalidInput::Date {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if !is_valid_time(self.hour, self.minute, self.second) {
            return Err(InvalidInput::Time {
                hour: self.hour,
                minute: self.minute,
                second: self.second,
            });
        }
        Ok(self)
    }

    /// Returns `(year, month, day)`.
    pub fn date(&self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }

    /// Returns `(hour, minute, second)`.
    pub fn time(&self) -> (i32, i32, i32) {
        (self.hour, self.minute, self.second)
    }
}

/// Formats as `YYYY-MM-DDTHH:MM:SSZ`.
impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Returns the weekday for a day count since 1970-01-01, a Thursday.
    pub(crate) fn from_epoch_days(days: i64) -> Self {
        Self::ALL[(days + 4).rem_euclid(7) as usize]
    }

    /// Days since Sunday (0..=6), the `tm_wday` numbering.
    pub fn num_days_from_sunday(self) -> u8 {
        self as u8
    }
}
