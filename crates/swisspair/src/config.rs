//! Optional configuration file and environment overrides.
//!
//! `swisspair.toml` in the working directory may set defaults:
//!
//! ```toml
//! format = "markdown"
//! telemetry = false
//! ```
//!
//! `SWISSPAIR_FORMAT` overrides the format default and
//! `SWISSPAIR_NO_TELEMETRY` (any value) disables telemetry. Explicit CLI
//! flags beat both. The config is loaded once in `main` and passed down as a
//! value; nothing reads it as ambient global state.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::cli::OutputFormat;

pub const CONFIG_FILE: &str = "swisspair.toml";
pub const FORMAT_ENV: &str = "SWISSPAIR_FORMAT";
pub const NO_TELEMETRY_ENV: &str = "SWISSPAIR_NO_TELEMETRY";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub format: Option<String>,
    pub telemetry: Option<bool>,
}

impl Config {
    /// Load `swisspair.toml` from the working directory, or defaults if the
    /// file is absent. A malformed file is ignored with a warning rather than
    /// aborting the run.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&contents) {
            Ok(config) => config,
            Err(error) => {
                warn!("ignoring malformed {}: {error}", path.display());
                Self::default()
            }
        }
    }

    /// Default output format: environment first, then the config file.
    /// Unrecognized names are ignored with a warning.
    pub fn default_format(&self) -> Option<OutputFormat> {
        let raw = env::var(FORMAT_ENV).ok().or_else(|| self.format.clone())?;
        match OutputFormat::parse(&raw) {
            Some(format) => Some(format),
            None => {
                warn!("ignoring unknown format '{raw}' from config");
                None
            }
        }
    }

    /// Telemetry is on unless the environment or the config file turns it off.
    pub fn telemetry_enabled(&self) -> bool {
        if env::var_os(NO_TELEMETRY_ENV).is_some() {
            return false;
        }
        self.telemetry.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load_from(Path::new("does-not-exist.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parses_format_and_telemetry() {
        let config: Config = toml::from_str("format = \"markdown\"\ntelemetry = false\n")
            .expect("valid config");
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(config.telemetry, Some(false));
    }
}
