use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// UTC calendar and epoch-seconds conversions for years 0000-9999.
#[derive(Parser)]
#[command(
    name = "utctime",
    version,
    about = "UTC civil date/time and POSIX epoch-seconds conversions"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./utctime.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for date/times: iso, epoch or fields. Overrides config.
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a civil date/time to epoch seconds.
    ToEpoch(ToEpochArgs),
    /// Convert epoch seconds to a civil date/time.
    FromEpoch(FromEpochArgs),
    /// Shift a date/time by a number of days and seconds.
    Adjust(AdjustArgs),
    /// Print the difference between two date/times as days and seconds.
    Diff(DiffArgs),
    /// Compute a validity window and optionally check an instant against it.
    Window(WindowArgs),
}

/// Arguments for the `to-epoch` subcommand.
#[derive(clap::Args)]
pub struct ToEpochArgs {
    /// Date/time as YYYY-MM-DD[THH:MM:SS][Z].
    pub datetime: String,
}

/// Arguments for the `from-epoch` subcommand.
#[derive(clap::Args)]
pub struct FromEpochArgs {
    /// Seconds since 1970-01-01T00:00:00Z; may be negative.
    #[arg(allow_hyphen_values = true)]
    pub seconds: i64,
}

/// Arguments for the `adjust` subcommand.
#[derive(clap::Args)]
pub struct AdjustArgs {
    /// Date/time to shift.
    pub datetime: String,

    /// Whole days to add (negative to subtract).
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    pub days: i64,

    /// Seconds to add after the days (negative to subtract).
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    pub seconds: i64,
}

/// Arguments for the `diff` subcommand.
#[derive(clap::Args)]
pub struct DiffArgs {
    /// Start date/time.
    pub from: String,

    /// End date/time.
    pub to: String,
}

/// Arguments for the `window` subcommand.
#[derive(clap::Args)]
pub struct WindowArgs {
    /// Start of the window (not before).
    pub not_before: String,

    /// Window length in days. Overrides `[window].default_days`.
    #[arg(short, long)]
    pub days: Option<i64>,

    /// Instant to check against the window.
    #[arg(short, long)]
    pub at: Option<String>,
}
