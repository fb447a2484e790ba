//! Directory service
//!
//! Joins the service catalog with the review store for the browse, detail
//! and review-submission flows.

use crate::catalog::{Service, ServiceCatalog};
use crate::error::{DirectoryError, Result};
use crate::rating::aggregate;
use crate::review::{Review, ReviewRequest, ReviewService};
use crate::search::{self, ServiceDetail, ServiceListing};
use crate::types::ServiceId;
use std::sync::Arc;
use tracing::debug;

/// Catalog plus reviews
#[derive(Clone)]
pub struct Directory {
    catalog: Arc<dyn ServiceCatalog>,
    reviews: ReviewService,
}

impl Directory {
    pub fn new(catalog: impl ServiceCatalog + 'static, reviews: ReviewService) -> Self {
        Self {
            catalog: Arc::new(catalog),
            reviews,
        }
    }

    /// Review service backing this directory
    pub fn reviews(&self) -> &ReviewService {
        &self.reviews
    }

    fn find(&self, id: &ServiceId) -> Result<Service> {
        self.catalog
            .get(id)?
            .ok_or_else(|| DirectoryError::ServiceNotFound(id.to_string()))
    }

    /// Ranked listings matching `query` (blank matches all)
    ///
    /// Every listing is summarised from the same store read.
    pub fn search(&self, query: &str) -> Result<Vec<ServiceListing>> {
        let services = self.catalog.list()?;
        let ids: Vec<ServiceId> = services.iter().map(|s| s.id.clone()).collect();
        let summaries = self.reviews.summaries(&ids)?;

        let listings: Vec<ServiceListing> = services
            .into_iter()
            .map(|service| {
                let summary = summaries.get(&service.id).copied().unwrap_or_default();
                ServiceListing::new(service, summary)
            })
            .collect();

        let total = listings.len();
        let results = search::search(listings, query);
        debug!("Search '{}' matched {} of {} listings", query, results.len(), total);
        Ok(results)
    }

    /// Listing with reviews and rating summary
    pub fn service_detail(&self, id: &ServiceId) -> Result<ServiceDetail> {
        let service = self.find(id)?;
        let reviews = self.reviews.get_reviews(id)?;
        let summary = aggregate(&reviews);

        Ok(ServiceDetail {
            listing: ServiceListing::new(service, summary),
            reviews,
        })
    }

    /// Review a listing that must exist in the catalog
    pub fn submit_review(
        &self,
        id: &ServiceId,
        rating: i64,
        comment: &str,
        author: &str,
    ) -> Result<Review> {
        let service = self.find(id)?;
        let request = ReviewRequest::new(service.id.clone(), rating, comment, author)
            .provider_name(service.name);
        self.reviews.submit(request)
    }
}
