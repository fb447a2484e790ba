//! JSON file listing catalog

use ndis_core::catalog::{Service, ServiceCatalog};
use ndis_core::error::{DirectoryError, Result};
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Catalog read from a `services.json` array
///
/// The file is re-read on every call so edits by the listing side of the
/// site show up without a restart. A missing file is an empty catalog.
/// Entries that do not decode as a listing are skipped with a warning.
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ServiceCatalog for JsonFileCatalog {
    fn list(&self) -> Result<Vec<Service>> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No listings file at {:?}", self.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(DirectoryError::unavailable("Failed to open listings", e)),
        };

        let entries: Vec<serde_json::Value> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| DirectoryError::unavailable("Failed to parse listings", e))?;

        let services: Vec<Service> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(service) => Some(service),
                Err(e) => {
                    warn!("Skipping listing {} in {:?}: {}", index, self.path, e);
                    None
                }
            })
            .collect();
        debug!("Loaded {} listings from {:?}", services.len(), self.path);
        Ok(services)
    }
}
