//! `struct tm`-style broken-down time.
//!
//! Years are stored as years since 1900 and months are zero-based, matching
//! the C layout consumed by ASN.1 time codecs. The conversions here only
//! remap those two fields and delegate to [`crate::convert`].

use crate::arith::{adjust, difference};
use crate::civil::{CivilDateTime, Weekday};
use crate::convert::{civil_to_epoch, days_from_civil, epoch_to_civil, ordinal0};
use crate::error::InvalidInput;

/// Broken-down UTC time in the `struct tm` layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BrokenDownTime {
    /// Seconds (0-59).
    pub tm_sec: i32,
    /// Minutes (0-59).
    pub tm_min: i32,
    /// Hours (0-23).
    pub tm_hour: i32,
    /// Day of month (1-31).
    pub tm_mday: i32,
    /// Month (0-11).
    pub tm_mon: i32,
    /// Years since 1900.
    pub tm_year: i32,
    /// Day of week (0-6, Sunday = 0). Ignored on input.
    pub tm_wday: i32,
    /// Day of year (0-365). Ignored on input.
    pub tm_yday: i32,
}

impl BrokenDownTime {
    /// Maps to a [`CivilDateTime`] with a four-digit year and 1-based month.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::Overflow`] if `tm_year + 1900` or
    /// `tm_mon + 1` overflows `i32`. The mapped value itself is not
    /// validated.
    pub fn to_civil(&self) -> Result<CivilDateTime, InvalidInput> {
        let overflow = InvalidInput::Overflow {
            operation: "broken-down time field",
        };
        let year = self.tm_year.checked_add(1900).ok_or(overflow.clone())?;
        let month = self.tm_mon.checked_add(1).ok_or(overflow)?;
        Ok(CivilDateTime::new(
            year,
            month,
            self.tm_mday,
            self.tm_hour,
            self.tm_min,
            self.tm_sec,
        ))
    }

    /// Builds the broken-down form of a valid [`CivilDateTime`], filling in
    /// `tm_wday` and `tm_yday`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if `dt` is invalid.
    pub fn from_civil(dt: CivilDateTime) -> Result<Self, InvalidInput> {
        let dt = dt.validate()?;
        let days = days_from_civil(dt.year, dt.month, dt.day);
        Ok(Self {
            tm_sec: dt.second,
            tm_min: dt.minute,
            tm_hour: dt.hour,
            tm_mday: dt.day,
            tm_mon: dt.month - 1,
            tm_year: dt.year - 1900,
            tm_wday: i32::from(Weekday::from_epoch_days(days).num_days_from_sunday()),
            tm_yday: ordinal0(dt.year, dt.month, dt.day),
        })
    }
}

/// Converts broken-down time to seconds since the epoch.
///
/// # Errors
///
/// Returns [`InvalidInput`] if the fields do not describe a valid date/time in
/// years 0000..=9999.
pub fn broken_down_to_epoch(tm: &BrokenDownTime) -> Result<i64, InvalidInput> {
    civil_to_epoch(tm.to_civil()?)
}

/// Converts seconds since the epoch to broken-down time.
///
/// # Errors
///
/// Returns [`InvalidInput::EpochOutOfRange`] if `seconds` falls outside years
/// 0000..=9999.
pub fn epoch_to_broken_down(seconds: i64) -> Result<BrokenDownTime, InvalidInput> {
    BrokenDownTime::from_civil(epoch_to_civil(seconds)?)
}

/// Shifts `tm` in place by `day_offset` days plus `second_offset` seconds.
///
/// On error `tm` is left unchanged.
///
/// # Errors
///
/// Returns [`InvalidInput`] under the same conditions as
/// [`adjust`](crate::adjust).
pub fn adjust_broken_down(
    tm: &mut BrokenDownTime,
    day_offset: i64,
    second_offset: i64,
) -> Result<(), InvalidInput> {
    let adjusted = adjust(tm.to_civil()?, day_offset, second_offset)?;
    *tm = BrokenDownTime::from_civil(adjusted)?;
    Ok(())
}

/// Returns `(days, seconds)` from `from` to `to`. See
/// [`difference`](crate::difference).
///
/// # Errors
///
/// Returns [`InvalidInput`] if either value is invalid or the day count does
/// not fit `i32`.
pub fn diff_broken_down(
    from: &BrokenDownTime,
    to: &BrokenDownTime,
) -> Result<(i32, i32), InvalidInput> {
    difference(from.to_civil()?, to.to_civil()?)
}

/// Narrows epoch seconds to a 32-bit `time_t`.
///
/// # Errors
///
/// Returns [`InvalidInput::Overflow`] if `seconds` is outside the `i32`
/// range (1901-12-13T20:45:52Z..=2038-01-19T03:14:07Z).
pub fn to_time32(seconds: i64) -> Result<i32, InvalidInput> {
    i32::try_from(seconds).map_err(|_| InvalidInput::Overflow {
        operation: "32-bit time_t",
    })
}

/// Converts a civil date/time directly to a 32-bit `time_t`.
///
/// # Errors
///
/// Returns [`InvalidInput`] if `dt` is invalid or outside the 32-bit range.
pub fn civil_to_time32(dt: CivilDateTime) -> Result<i32, InvalidInput> {
    to_time32(civil_to_epoch(dt)?)
}
