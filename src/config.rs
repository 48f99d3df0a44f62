use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "utctime.toml";

/// Top-level utctime configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UtctimeConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Validity window settings.
    #[serde(default)]
    pub window: WindowToml,
}

impl UtctimeConfig {
    /// Loads configuration from `path`, or from [`DEFAULT_CONFIG_PATH`] when
    /// `path` is `None` and that file exists. Falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Self::from_toml(&toml_str)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "iso".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowToml {
    #[serde(default = "default_days")]
    pub default_days: i64,
}

impl Default for WindowToml {
    fn default() -> Self {
        Self {
            default_days: default_days(),
        }
    }
}

fn default_days() -> i64 {
    365
}
