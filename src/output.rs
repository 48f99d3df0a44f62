//! Rendering of date/times for the selected output format.

use anyhow::{Context, Result};

use utctime_calendar::{BrokenDownTime, CivilDateTime, civil_to_epoch};

/// How date/times are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `YYYY-MM-DDTHH:MM:SSZ`.
    Iso,
    /// Seconds since the epoch.
    Epoch,
    /// `struct tm` fields, one `name=value` pair per field.
    Fields,
}

/// Renders `dt` in `format`.
pub fn render(dt: CivilDateTime, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Iso => Ok(dt.to_string()),
        OutputFormat::Epoch => Ok(civil_to_epoch(dt)
            .with_context(|| format!("cannot convert {dt}"))?
            .to_string()),
        OutputFormat::Fields => {
            let tm = BrokenDownTime::from_civil(dt).with_context(|| format!("cannot convert {dt}"))?;
            Ok(format!(
                "tm_year={} tm_mon={} tm_mday={} tm_hour={} tm_min={} tm_sec={} tm_wday={} tm_yday={}",
                tm.tm_year,
                tm.tm_mon,
                tm.tm_mday,
                tm.tm_hour,
                tm.tm_min,
                tm.tm_sec,
                tm.tm_wday,
                tm.tm_yday
            ))
        }
    }
}
