//! Catalog configuration file support.
//!
//! Reads backend selection and server settings from a TOML configuration
//! file (`catalog.toml`) with environment-variable overrides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::repository::RepositoryError;

/// Repository backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryKind {
    /// In-memory copy-on-write repository
    Memory,
}

impl FromStr for RepositoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "local" => Ok(Self::Memory),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryKind {
    /// Get the repository kind from the `REPOSITORY_TYPE` environment
    /// variable, defaulting to the in-memory backend.
    pub fn from_env() -> Self {
        std::env::var("REPOSITORY_TYPE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Self::Memory)
    }
}

/// Catalog configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub repository: RepositorySettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Repository backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type", default = "default_repo_type")]
    pub repo_type: String,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: default_repo_type(),
        }
    }
}

fn default_repo_type() -> String {
    "memory".to_string()
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl CatalogConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(CatalogConfig)` if successful
    /// * `Err(RepositoryError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        let config: CatalogConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load configuration from the default locations, falling back to
    /// defaults when no `catalog.toml` exists.
    ///
    /// Searches for `catalog.toml` in the current directory, then the parent
    /// directory.
    pub fn from_default_location() -> Self {
        let search_paths = [
            PathBuf::from("catalog.toml"),
            PathBuf::from("../catalog.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                if let Ok(config) = Self::from_file(&path) {
                    return config;
                }
            }
        }

        Self {
            repository: RepositorySettings::default(),
            server: ServerSettings::default(),
        }
    }

    /// Resolve the repository kind, with `REPOSITORY_TYPE` taking precedence
    /// over the config file.
    pub fn repository_kind(&self) -> Result<RepositoryKind, RepositoryError> {
        if let Ok(v) = std::env::var("REPOSITORY_TYPE") {
            return v.parse().map_err(RepositoryError::ConfigurationError);
        }
        self.repository
            .repo_type
            .parse()
            .map_err(RepositoryError::ConfigurationError)
    }
}
