//! Pure conversion functions: TOML config structs and CLI strings -> typed settings.

use anyhow::{Result, bail};

use crate::config::OutputToml;
use crate::output::OutputFormat;

/// Parses an output format name string into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "iso" => Ok(OutputFormat::Iso),
        "epoch" => Ok(OutputFormat::Epoch),
        "fields" | "tm" => Ok(OutputFormat::Fields),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Picks the output format: the CLI flag wins over `[output].format`.
pub fn resolve_format(cli: Option<&str>, output: &OutputToml) -> Result<OutputFormat> {
    parse_format(cli.unwrap_or(&output.format))
}
