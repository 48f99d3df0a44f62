//! Error types for the utctime-calendar crate.

/// Error type for all fallible operations in the utctime-calendar crate.
///
/// Every variant is the same kind of failure: the input cannot be
/// represented as a UTC instant in years 0000 through 9999. Callers checking
/// certificate validity should reject the field regardless of the variant;
/// the payload exists for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// Returned when a year/month/day triple is not a Gregorian date in
    /// years 0000..=9999.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    Date {
        /// The year that was provided.
        year: i32,
        /// The month that was provided.
        month: i32,
        /// The day that was provided.
        day: i32,
    },

    /// Returned when a time of day is out of range. Leap seconds (60) are
    /// never valid.
    #[error("invalid time: {hour:02}:{minute:02}:{second:02}")]
    Time {
        /// The hour that was provided.
        hour: i32,
        /// The minute that was provided.
        minute: i32,
        /// The second that was provided.
        second: i32,
    },

    /// Returned when an epoch value lies outside
    /// 0000-01-01T00:00:00Z..=9999-12-31T23:59:59Z.
    #[error("epoch seconds {seconds} outside 0000-01-01T00:00:00Z..=9999-12-31T23:59:59Z")]
    EpochOutOfRange {
        /// The out-of-range epoch value.
        seconds: i64,
    },

    /// Returned when an intermediate result does not fit its integer width.
    #[error("arithmetic overflow in {operation}")]
    Overflow {
        /// Name of the operation that overflowed.
        operation: &'static str,
    },

    /// Returned when a validity window ends before it starts.
    #[error("window not_after ({not_after}) precedes not_before ({not_before})")]
    InvertedWindow {
        /// Epoch seconds of the window start.
        not_before: i64,
        /// Epoch seconds of the window end.
        not_after: i64,
    },
}
