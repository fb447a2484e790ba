//! Review submission and lookup

use super::model::{Review, ReviewRequest};
use super::store::ReviewStore;
use super::validator::ReviewValidator;
use crate::error::Result;
use crate::rating::{aggregate, RatingSummary};
use crate::types::ServiceId;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Validates submissions and routes them to a review store
#[derive(Clone)]
pub struct ReviewService {
    store: Arc<dyn ReviewStore>,
    validator: ReviewValidator,
}

impl ReviewService {
    /// Create a service over the given store with default validation
    pub fn new(store: impl ReviewStore + 'static) -> Self {
        Self::with_store(Arc::new(store))
    }

    /// Create a service over a shared store
    pub fn with_store(store: Arc<dyn ReviewStore>) -> Self {
        Self {
            store,
            validator: ReviewValidator::new(),
        }
    }

    /// Replace the validator
    pub fn with_validator(mut self, validator: ReviewValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Add a review for `target_id`
    pub fn add_review(
        &self,
        target_id: impl Into<ServiceId>,
        rating: i64,
        comment: &str,
        author: &str,
    ) -> Result<Review> {
        self.submit(ReviewRequest::new(target_id, rating, comment, author))
    }

    /// Validate and store a full submission
    pub fn submit(&self, request: ReviewRequest) -> Result<Review> {
        let target = request.target_id.clone();
        let draft = self.validator.validate(request).map_err(|e| {
            debug!("Rejected review for {}: {}", target, e);
            e
        })?;

        let review = self.store.append(draft).map_err(|e| {
            warn!("Failed to store review for {}: {}", target, e);
            e
        })?;

        info!("Stored review {} for service {}", review.id, review.target_id);
        Ok(review)
    }

    /// All reviews for `target_id`, newest first
    pub fn get_reviews(&self, target_id: &ServiceId) -> Result<Vec<Review>> {
        let reviews = self.store.query_by_target(target_id)?;
        debug!("Found {} reviews for service {}", reviews.len(), target_id);
        Ok(reviews)
    }

    /// Fresh rating summaries for `target_ids` from one store query
    pub fn summaries(&self, target_ids: &[ServiceId]) -> Result<HashMap<ServiceId, RatingSummary>> {
        let grouped = self.store.query_by_targets(target_ids)?;
        debug!("Summarising reviews for {} services", grouped.len());
        Ok(grouped
            .into_iter()
            .map(|(id, reviews)| (id, aggregate(&reviews)))
            .collect())
    }
}
