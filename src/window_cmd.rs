//! `window` command: certificate-style validity window.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use utctime_calendar::ValidityWindow;

use crate::cli::WindowArgs;
use crate::config::WindowToml;
use crate::output::{OutputFormat, render};
use crate::parse::parse_datetime;

/// Prints the window bounds and, with `--at`, whether the instant is inside.
///
/// Exits with an error when `--at` falls outside the window, so the command
/// can gate scripts.
pub fn run(args: WindowArgs, config: &WindowToml, format: OutputFormat) -> Result<()> {
    let _cmd = info_span!("window").entered();
    let not_before = parse_datetime(&args.not_before)?;
    let days = args.days.unwrap_or(config.default_days);
    let window = ValidityWindow::for_days(not_before, days)
        .with_context(|| format!("cannot build a {days}-day window from {not_before}"))?;
    info!(days, not_after = %window.not_after(), "window computed");

    println!("not_before {}", render(window.not_before(), format)?);
    println!("not_after  {}", render(window.not_after(), format)?);

    let Some(at) = args.at else {
        return Ok(());
    };
    let at = parse_datetime(&at)?;
    let (days_left, secs_left) = window.remaining(at)?;
    println!("remaining  {days_left} {secs_left}");
    if !window.contains(at)? {
        bail!("{at} is outside the validity window");
    }
    println!("valid");
    Ok(())
}
