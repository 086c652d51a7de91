//! Application configuration.
//!
//! Configuration is layered: built-in defaults, then an optional JSON
//! config file, then `BAKEHOUSE_*` environment variables, then CLI flags
//! (applied by the binary). Every field defaults sensibly so a completely
//! empty `{}` file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::Error;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
        }
    }
}

/// HTTP server and storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            db_path: PathBuf::from("bakehouse.db"),
        }
    }
}

impl Config {
    /// Deserialize a `Config` from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| Error::Validation(format!("config parse error: {e}")))
    }

    /// Load configuration from a file path, falling back to defaults if the
    /// path is `None` or the file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config file at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read config file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Overlay `BAKEHOUSE_HOST`, `BAKEHOUSE_PORT`, and `BAKEHOUSE_DB` from
    /// the environment onto this config.
    ///
    /// An unparsable `BAKEHOUSE_PORT` is logged and ignored rather than
    /// aborting startup.
    pub fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("BAKEHOUSE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("BAKEHOUSE_PORT") {
            match port.parse::<u16>() {
                Ok(p) => self.server.port = p,
                Err(e) => tracing::warn!("Ignoring BAKEHOUSE_PORT={port}: {e}"),
            }
        }
        if let Ok(db) = std::env::var("BAKEHOUSE_DB") {
            self.server.db_path = PathBuf::from(db);
        }
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.server.port == 0 {
            warnings.push("server.port is 0; a random port will be assigned".into());
        }

        if self.server.db_path.as_os_str().is_empty() {
            warnings.push("server.db_path is empty; the database cannot be opened".into());
        }

        warnings
    }
}
