//! Runtime configuration loaded from environment variables.

use std::path::PathBuf;

use anyhow::Result;

use crate::db::{self, Database};
use crate::templates::Templates;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_FILTER: &str = "travel_wishlist=debug,tower_http=debug";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind (from TRAVEL_WISHLIST_HOST)
    pub host: String,
    /// Port to listen on (from TRAVEL_WISHLIST_PORT)
    pub port: u16,
    /// SQLite file (from TRAVEL_WISHLIST_DATABASE); the platform data
    /// directory is used when unset
    pub database_path: Option<PathBuf>,
    /// Directory of replacement templates (from TRAVEL_WISHLIST_TEMPLATES)
    pub templates_dir: Option<PathBuf>,
    /// Log filter used when RUST_LOG is unset (from TRAVEL_WISHLIST_LOG)
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("TRAVEL_WISHLIST_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid TRAVEL_WISHLIST_PORT: {}", raw);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: non_empty("TRAVEL_WISHLIST_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_path: non_empty("TRAVEL_WISHLIST_DATABASE").map(PathBuf::from),
            templates_dir: non_empty("TRAVEL_WISHLIST_TEMPLATES").map(PathBuf::from),
            log_filter: non_empty("TRAVEL_WISHLIST_LOG")
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn open_database(&self) -> Result<Database> {
        match &self.database_path {
            Some(path) => Database::open(path.clone()),
            None => Database::open_default(),
        }
    }

    pub fn database_location(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => db::default_path(),
        }
    }

    pub fn load_templates(&self) -> Result<Templates> {
        match &self.templates_dir {
            Some(dir) => Templates::from_dir(dir),
            None => Templates::embedded(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}
