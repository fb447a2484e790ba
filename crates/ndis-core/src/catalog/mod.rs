//! Service catalog module
//!
//! The catalog supplies listings and their featured flag. It is owned by
//! the surrounding product; the review core only reads from it.

mod model;

pub use model::Service;

use crate::error::Result;
use crate::types::ServiceId;

/// Read access to service listings
pub trait ServiceCatalog: Send + Sync {
    /// All listings in catalog order
    fn list(&self) -> Result<Vec<Service>>;

    /// A single listing by id
    fn get(&self, id: &ServiceId) -> Result<Option<Service>> {
        Ok(self.list()?.into_iter().find(|s| &s.id == id))
    }
}

/// Catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    services: Vec<Service>,
}

impl MemoryCatalog {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }
}

impl ServiceCatalog for MemoryCatalog {
    fn list(&self) -> Result<Vec<Service>> {
        Ok(self.services.clone())
    }
}
