//! Certificate-style validity windows.

use tracing::debug;

use crate::arith::{adjust, difference};
use crate::civil::CivilDateTime;
use crate::convert::civil_to_epoch;
use crate::error::InvalidInput;

/// An inclusive `[not_before, not_after]` span of UTC time.
///
/// Both ends are validated on construction, so queries only have to
/// validate the instant being checked.
///
/// # Example
///
/// ```
/// use utctime_calendar::{CivilDateTime, ValidityWindow};
///
/// let issued = CivilDateTime::midnight(2024, 1, 1);
/// let window = ValidityWindow::for_days(issued, 366).unwrap();
/// assert_eq!(window.not_after(), CivilDateTime::midnight(2025, 1, 1));
/// assert!(window.contains(CivilDateTime::midnight(2024, 7, 1)).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidityWindow {
    not_before: CivilDateTime,
    not_after: CivilDateTime,
    start: i64,
    end: i64,
}

impl ValidityWindow {
    /// Creates a window from explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if either bound is invalid, or
    /// [`InvalidInput::InvertedWindow`] if `not_after` precedes `not_before`.
    pub fn new(not_before: CivilDateTime, not_after: CivilDateTime) -> Result<Self, InvalidInput> {
        let start = civil_to_epoch(not_before)?;
        let end = civil_to_epoch(not_after)?;
        if end < start {
            return Err(InvalidInput::InvertedWindow {
                not_before: start,
                not_after: end,
            });
        }
        Ok(Self {
            not_before,
            not_after,
            start,
            end,
        })
    }

    /// Creates a window starting at `not_before` and lasting `days` days.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if `not_before` is invalid, if the end falls
    /// outside years 0000..=9999, or if `days` is negative.
    #[tracing::instrument(level = "debug", skip(not_before), fields(start = %not_before))]
    pub fn for_days(not_before: CivilDateTime, days: i64) -> Result<Self, InvalidInput> {
        let not_after = adjust(not_before, days, 0)?;
        debug!(not_after = %not_after, "computed window end");
        Self::new(not_before, not_after)
    }

    /// Returns the first instant of the window.
    pub fn not_before(&self) -> CivilDateTime {
        self.not_before
    }

    /// Returns the last instant of the window.
    pub fn not_after(&self) -> CivilDateTime {
        self.not_after
    }

    /// Returns `(not_before, not_after)` as epoch seconds.
    pub fn epoch_bounds(&self) -> (i64, i64) {
        (self.start, self.end)
    }

    /// Returns `true` if `at` lies within the window, bounds included.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if `at` is invalid.
    pub fn contains(&self, at: CivilDateTime) -> Result<bool, InvalidInput> {
        let t = civil_to_epoch(at)?;
        Ok((self.start..=self.end).contains(&t))
    }

    /// Returns `(days, seconds)` from `at` until `not_after`; negative once
    /// the window has expired.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if `at` is invalid.
    pub fn remaining(&self, at: CivilDateTime) -> Result<(i32, i32), InvalidInput> {
        difference(at, self.not_after)
    }
}
