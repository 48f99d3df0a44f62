//! `adjust` and `diff` commands.

use anyhow::{Context, Result};
use tracing::info;

use utctime_calendar::{adjust as adjust_datetime, difference};

use crate::cli::{AdjustArgs, DiffArgs};
use crate::output::{OutputFormat, render};
use crate::parse::parse_datetime;

/// Prints a date/time shifted by the requested days and seconds.
pub fn adjust(args: AdjustArgs, format: OutputFormat) -> Result<()> {
    let dt = parse_datetime(&args.datetime)?;
    let shifted = adjust_datetime(dt, args.days, args.seconds).with_context(|| {
        format!(
            "cannot shift {dt} by {} days and {} seconds",
            args.days, args.seconds
        )
    })?;
    info!(from = %dt, to = %shifted, "adjusted");
    println!("{}", render(shifted, format)?);
    Ok(())
}

/// Prints `days seconds` from the first date/time to the second.
pub fn diff(args: DiffArgs) -> Result<()> {
    let from = parse_datetime(&args.from)?;
    let to = parse_datetime(&args.to)?;
    let (days, seconds) = difference(from, to)?;
    info!(%from, %to, days, seconds, "computed difference");
    println!("{days} {seconds}");
    Ok(())
}
