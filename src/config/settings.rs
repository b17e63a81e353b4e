//! Application settings.
//!
//! Settings come from an optional TOML file (`config.toml` by default, or the
//! path in `BUDGET_CONFIG`) and are then overridden by `HOST`, `PORT` and
//! `DATABASE_URL` from the environment. The file may also list categories used
//! to seed an empty store.

use crate::entities::category::DEFAULT_COLOR;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Settings for the HTTP listener
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Whether cross-origin requests from any origin are allowed
    pub allow_any_origin: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            allow_any_origin: true,
        }
    }
}

impl ServerSettings {
    /// Socket address built from `host` and `port`.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config {
                message: format!("Invalid listen address {}:{}: {e}", self.host, self.port),
            })
    }
}

/// A category created on first start when the store has none
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CategorySeed {
    /// Category name
    pub name: String,
    /// Hex color, defaults to the standard category color
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Shape of config.toml
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    server: ServerSettings,
    database_url: Option<String>,
    #[serde(default)]
    categories: Vec<CategorySeed>,
}

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// HTTP listener settings
    pub server: ServerSettings,
    /// Store connection URL
    pub database_url: String,
    /// Categories to seed into an empty store
    pub categories: Vec<CategorySeed>,
}

impl Settings {
    /// Parses settings from TOML text without consulting the environment.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse config.toml: {e}"),
        })?;

        Ok(Self {
            server: file.server,
            database_url: file
                .database_url
                .unwrap_or_else(|| super::database::DEFAULT_DATABASE_URL.to_string()),
            categories: file.categories,
        })
    }

    /// Applies `HOST`, `PORT` and `DATABASE_URL` overrides using `lookup` to read variables.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.parse().map_err(|e| Error::Config {
                message: format!("Invalid PORT value {port:?}: {e}"),
            })?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        Ok(self)
    }

    /// Loads settings from a TOML file, then applies environment overrides.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
        let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
            message: format!("Failed to read config file {path_ref:?}: {e}"),
        })?;
        Self::from_toml_str(&contents)?.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Loads settings from `BUDGET_CONFIG` or `./config.toml`.
    ///
    /// A missing default file falls back to built-in defaults; a missing file
    /// named explicitly through `BUDGET_CONFIG` is an error.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var("BUDGET_CONFIG") {
            return Self::load_from(path);
        }
        if Path::new(DEFAULT_CONFIG_PATH).exists() {
            return Self::load_from(DEFAULT_CONFIG_PATH);
        }
        tracing::info!("No {} found, using default settings", DEFAULT_CONFIG_PATH);
        Self::from_toml_str("")?.apply_overrides(|key| std::env::var(key).ok())
    }
}
