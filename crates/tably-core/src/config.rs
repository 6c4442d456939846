//! Configuration loading and typed config structures for the daemon.
//!
//! The canonical configuration lives in `tably.yaml` next to the
//! binary. This module defines strongly-typed structs mirroring the
//! YAML structure and a loader that reads the file. Every field has a
//! default, so a partial (or absent) file is fine.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level daemon configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DaemonConfig {
    /// HTTP + `WebSocket` server settings.
    #[serde(default)]
    pub server: HttpConfig,

    /// Daily rollover trigger time.
    #[serde(default)]
    pub rollover: RolloverConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DaemonConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&content)?)
    }
}

/// HTTP server bind settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,
    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Daily rollover trigger time (UTC wall clock).
///
/// Defaults to midnight, matching the original deployment's
/// `0 0 * * *` cron expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RolloverConfig {
    /// Hour of day (0-23).
    #[serde(default)]
    pub hour: u32,
    /// Minute within the hour (0-59).
    #[serde(default)]
    pub minute: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter when `RUST_LOG` is unset (e.g. `info`,
    /// `tably_server=debug`).
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

fn default_filter() -> String {
    String::from("info")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config: DaemonConfig = serde_yml::from_str("{}").unwrap();
        assert_eq!(config, DaemonConfig::default());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.rollover.hour, 0);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn partial_yaml_overrides_only_named_fields() {
        let yaml = "server:\n  port: 9090\nrollover:\n  hour: 4\n  minute: 30\n";
        let config: DaemonConfig = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.rollover.hour, 4);
        assert_eq!(config.rollover.minute, 30);
    }
}
