//! Server configuration.
//!
//! Values come from an optional TOML file, then the `PORT` environment
//! variable, then command-line flags, each layer overriding the last.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for the HTTP game server.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    host: String,

    /// Port to bind to.
    #[serde(default = "default_port")]
    port: u16,

    /// Maximum number of concurrent games (unbounded when absent).
    #[serde(default)]
    max_games: Option<usize>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_games: None,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Applies the `PORT` environment variable if it holds a valid port.
    #[instrument(skip(self))]
    pub fn with_port_env(mut self, value: Option<String>) -> Result<Self, ConfigError> {
        if let Some(raw) = value {
            self.port = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::new(format!("Invalid PORT value '{}'", raw)))?;
            debug!(port = self.port, "Port taken from environment");
        }
        Ok(self)
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        max_games: Option<usize>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if max_games.is_some() {
            self.max_games = max_games;
        }
        self
    }

    /// `host:port` for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(*config.max_games(), None);
    }

    #[test]
    fn test_from_file_fills_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 8080\nmax_games = 16").unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(*config.port(), 8080);
        assert_eq!(*config.max_games(), Some(16));
    }

    #[test]
    fn test_from_file_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();

        let err = ServerConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file() {
        let err = ServerConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_layering() {
        let config = ServerConfig::default()
            .with_port_env(Some("4000".to_string()))
            .unwrap()
            .with_overrides(Some("0.0.0.0".to_string()), None, Some(2));
        assert_eq!(config.bind_address(), "0.0.0.0:4000");
        assert_eq!(*config.max_games(), Some(2));

        let config = config.with_overrides(None, Some(5000), None);
        assert_eq!(*config.port(), 5000);
        assert_eq!(*config.max_games(), Some(2));
    }

    #[test]
    fn test_bad_port_env() {
        assert!(ServerConfig::default().with_port_env(Some("abc".to_string())).is_err());
    }
}
