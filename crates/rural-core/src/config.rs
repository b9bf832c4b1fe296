//! Dashboard configuration
//!
//! Settings come from an optional TOML file layered under CLI flags and
//! `RURAL_*` environment variables (handled by the CLI). Example:
//!
//! ```toml
//! data_path = "data/rural-investments.csv"
//! host = "0.0.0.0"
//! port = 8050
//! allowed_origins = ["http://localhost:5173"]
//! static_dir = "ui/dist"
//!
//! [page]
//! title = "Rural Investments 2024"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::PageText;

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "data/rural-investments.csv";

pub const DEFAULT_HOST: &str = "127.0.0.1";

pub const DEFAULT_PORT: u16 = 8050;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
    /// Directory of a static front end to serve at `/`
    pub static_dir: Option<PathBuf>,
    pub page: PageText,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: vec![],
            static_dir: None,
            page: PageText::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse a config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        debug!(path = %path.display(), "Loaded dashboard config");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load the explicit config file if given, otherwise the default file
    /// if it exists, otherwise built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Platform config location (~/.config/rural/dashboard.toml on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rural").join("dashboard.toml"))
}
