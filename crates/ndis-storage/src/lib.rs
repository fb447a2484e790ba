//! ndis-storage - Storage library for ndis-directory
//!
//! This crate provides JSON file implementations of the review store and
//! the listing catalog.

mod catalog;
mod review_store;

pub use catalog::JsonFileCatalog;
pub use review_store::{JsonFileReviewStore, CURRENT_SCHEMA_VERSION};

use ndis_core::config::StorageConfig;
use ndis_core::error::Result;
use std::path::PathBuf;

/// Per-user data directory (e.g. ~/.local/share/ndis-directory)
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("org", "ndis-directory", "ndis-directory")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".ndis-directory")
        })
}

/// Open both JSON stores described by `config`
pub fn open(config: &StorageConfig) -> Result<(JsonFileCatalog, JsonFileReviewStore)> {
    let catalog = JsonFileCatalog::new(config.data_dir.join(&config.services_file));
    let reviews = JsonFileReviewStore::new(config.data_dir.join(&config.reviews_file))?;
    Ok((catalog, reviews))
}
