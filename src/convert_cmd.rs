//! `to-epoch` and `from-epoch` commands.

use anyhow::{Context, Result};
use tracing::info;

use utctime_calendar::{civil_to_epoch, epoch_to_civil};

use crate::cli::{FromEpochArgs, ToEpochArgs};
use crate::output::{OutputFormat, render};
use crate::parse::parse_datetime;

/// Prints the epoch seconds of a civil date/time.
pub fn to_epoch(args: ToEpochArgs) -> Result<()> {
    let dt = parse_datetime(&args.datetime)?;
    let secs = civil_to_epoch(dt)?;
    info!(%dt, secs, "converted to epoch");
    println!("{secs}");
    Ok(())
}

/// Prints the civil date/time of an epoch value.
pub fn from_epoch(args: FromEpochArgs, format: OutputFormat) -> Result<()> {
    let dt = epoch_to_civil(args.seconds)
        .with_context(|| format!("cannot convert epoch seconds {}", args.seconds))?;
    info!(secs = args.seconds, %dt, "converted from epoch");
    println!("{}", render(dt, format)?);
    Ok(())
}
