//! Configuration management for ndis-directory

use crate::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default project-local configuration path
pub const DEFAULT_CONFIG_PATH: &str = ".ndis-directory/config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage settings
    pub storage: StorageConfig,
    /// Review submission settings
    pub review: ReviewConfig,
    /// Search settings
    pub search: SearchConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DirectoryError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| DirectoryError::Config(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(DirectoryError::FileNotFound(_)) => {
                debug!("No configuration at {:?}, using defaults", path);
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| DirectoryError::Config(e.to_string()))
    }

    /// Path of the reviews file
    pub fn reviews_path(&self) -> PathBuf {
        self.storage.data_dir.join(&self.storage.reviews_file)
    }

    /// Path of the service listings file
    pub fn services_path(&self) -> PathBuf {
        self.storage.data_dir.join(&self.storage.services_file)
    }
}

/// Storage-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the JSON data files
    pub data_dir: PathBuf,
    /// Review log file name
    pub reviews_file: String,
    /// Service listings file name
    pub services_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".ndis-directory/data"),
            reviews_file: "reviews.json".to_string(),
            services_file: "services.json".to_string(),
        }
    }
}

/// Review-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Maximum comment length in characters
    pub max_comment_length: usize,
    /// Maximum author name length in characters
    pub max_author_length: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            max_comment_length: 2000,
            max_author_length: 255,
        }
    }
}

/// Search-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of listings shown when no limit is given
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { default_limit: 20 }
    }
}
