//! Generator configuration
//!
//! Defaults cover local use. `from_env()` layers an optional JSON file
//! (path in `CONVENANT_CONFIG`) and the `HOST` / `PORT` variables on top.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ENV: &str = "CONVENANT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid port: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// First component of the export file name
    pub document_type: String,
    pub export_extension: String,
    /// Surnames used in the file name while the spouses' surnames are unset
    pub fallback_surnames: [String; 2],
    pub host: String,
    pub port: u16,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            document_type: "Echtscheidingsconvenant".to_string(),
            export_extension: "md".to_string(),
            fallback_surnames: ["Partij1".to_string(), "Partij2".to_string()],
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl GeneratorConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };

        if let Ok(host) = std::env::var("HOST") {
            if !host.trim().is_empty() {
                config.host = host.trim().to_string();
            }
        }
        if let Ok(port) = std::env::var("PORT") {
            config.port = parse_port(&port)?;
        }

        tracing::debug!(host = %config.host, port = config.port, "Loaded generator config");
        Ok(config)
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort(raw.to_string()))
}
