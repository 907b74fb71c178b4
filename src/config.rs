//! Configuration management for NotifyHub
//!
//! This module defines the main `Config` struct and its sub-structs. It uses
//! the `figment` crate to layer, in increasing priority: built-in defaults,
//! a `notifyhub.toml` file, `NOTIFYHUB_` environment variables and finally
//! the command-line flags.

use anyhow::{bail, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::cli::Cli;
use crate::hub::DuplicatePolicy;

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "notifyhub.toml";

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// The logging level (an `EnvFilter` directive) for diagnostics on stderr.
    pub log_level: String,
    /// Configuration for notice rendering.
    pub output: OutputConfig,
    /// Configuration for the notification hub.
    pub hub: HubConfig,
}

/// The format notices are printed in.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    PlainText,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "Json"),
            OutputFormat::PlainText => write!(f, "PlainText"),
        }
    }
}

/// Configuration for output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Configuration for the notification hub.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HubConfig {
    /// Whether an already-registered user may be attached again.
    pub duplicate_policy: DuplicatePolicy,
}

impl Config {
    /// Loads the application configuration.
    ///
    /// A config file named explicitly with `--config` must exist; the
    /// default `notifyhub.toml` is optional.
    pub fn load(cli: &Cli) -> Result<Self> {
        let path = match &cli.config {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                path.as_path()
            }
            None => Path::new(DEFAULT_CONFIG_FILE),
        };

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            // e.g. NOTIFYHUB_LOG_LEVEL=debug or NOTIFYHUB_OUTPUT__FORMAT=Json
            .merge(Env::prefixed("NOTIFYHUB_").split("__"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            output: OutputConfig {
                format: OutputFormat::PlainText,
            },
            hub: HubConfig {
                duplicate_policy: DuplicatePolicy::Allow,
            },
        }
    }
}
