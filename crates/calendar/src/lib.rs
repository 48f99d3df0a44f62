//! # utctime-calendar
//!
//! Civil date/time ⇄ POSIX epoch-seconds conversion for the proleptic
//! Gregorian calendar, years 0000 through 9999, UTC only. There is no time
//! zone or leap-second support.
//!
//! Every operation is a pure function that validates before it computes and
//! reports [`InvalidInput`] instead of wrapping, clamping, or panicking.
//! Nothing allocates.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CivilDateTime"] -->|"civil_to_epoch()"| B["i64 epoch seconds"]
//!     B -->|"epoch_to_civil()"| A
//!     A -->|"adjust()"| A
//!     A -->|"difference()"| C["(days, seconds)"]
//!     D["BrokenDownTime"] -->|"broken_down_to_epoch()"| B
//!     B -->|"epoch_to_broken_down()"| D
//!     A -->|"ValidityWindow::for_days()"| E["ValidityWindow"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use utctime_calendar::{CivilDateTime, adjust, civil_to_epoch, difference, epoch_to_civil};
//!
//! let start = CivilDateTime::new(2000, 2, 28, 12, 0, 0);
//! let secs = civil_to_epoch(start).unwrap();
//! assert_eq!(epoch_to_civil(secs).unwrap(), start);
//!
//! let later = adjust(start, 1, 0).unwrap();
//! assert_eq!(later, CivilDateTime::new(2000, 2, 29, 12, 0, 0));
//! assert_eq!(difference(start, later).unwrap(), (1, 0));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `validate` | Range predicates and calendar constants |
//! | `civil` | `CivilDateTime` and `Weekday` |
//! | `convert` | Era-based civil ⇄ epoch conversion |
//! | `arith` | Offset adjustment, difference, comparison |
//! | `broken_down` | `struct tm` layout and 32-bit `time_t` narrowing |
//! | `window` | Inclusive validity windows |
//! | `error` | Error types |

mod arith;
mod broken_down;
mod civil;
mod convert;
mod error;
mod validate;
mod window;

pub use arith::{DayTimeOffset, adjust, adjust_by, compare, difference};
pub use broken_down::{
    BrokenDownTime, adjust_broken_down, broken_down_to_epoch, civil_to_time32, diff_broken_down,
    epoch_to_broken_down, to_time32,
};
pub use civil::{CivilDateTime, Weekday};
pub use convert::{civil_to_epoch, epoch_to_civil, weekday};
pub use error::InvalidInput;
pub use validate::{
    MAX_EPOCH_SECONDS, MAX_YEAR, MIN_EPOCH_SECONDS, MIN_YEAR, SECS_PER_DAY, SECS_PER_HOUR,
    days_in_month, is_leap_year, is_valid_date, is_valid_epoch_seconds, is_valid_time,
};
pub use window::ValidityWindow;
