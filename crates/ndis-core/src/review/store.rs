//! Review storage trait and abstractions

use super::model::{Review, ReviewDraft};
use crate::error::Result;
use crate::types::ServiceId;
use std::collections::HashMap;

/// Append-only review log, queryable by target
///
/// Implementations must write each review in a single atomic step and
/// generate ids that stay unique under concurrent appends.
pub trait ReviewStore: Send + Sync {
    /// Store a validated draft and return the created review
    fn append(&self, draft: ReviewDraft) -> Result<Review>;

    /// All reviews for a target, newest first (empty when none exist)
    fn query_by_target(&self, target_id: &ServiceId) -> Result<Vec<Review>>;

    /// Reviews for each of `target_ids`, newest first, keyed by target
    ///
    /// The default issues one `query_by_target` per id. Stores that can read
    /// every target in one pass override it so all targets come from the
    /// same snapshot.
    fn query_by_targets(
        &self,
        target_ids: &[ServiceId],
    ) -> Result<HashMap<ServiceId, Vec<Review>>> {
        target_ids
            .iter()
            .map(|id| Ok((id.clone(), self.query_by_target(id)?)))
            .collect()
    }
}

/// Group append-ordered reviews under each of `target_ids`, newest first
///
/// Targets without reviews map to an empty list.
pub fn group_by_target(
    reviews: impl IntoIterator<Item = Review>,
    target_ids: &[ServiceId],
) -> HashMap<ServiceId, Vec<Review>> {
    let mut grouped: HashMap<ServiceId, Vec<Review>> =
        target_ids.iter().map(|id| (id.clone(), Vec::new())).collect();
    for review in reviews {
        if let Some(bucket) = grouped.get_mut(&review.target_id) {
            bucket.push(review);
        }
    }
    for bucket in grouped.values_mut() {
        sort_newest_first(bucket);
    }
    grouped
}

/// Order reviews newest first
///
/// `reviews` must be in append order; reviews sharing a timestamp come
/// back most-recently-appended first.
pub fn sort_newest_first(reviews: &mut [Review]) {
    reviews.reverse();
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// In-memory review store
pub mod memory {
    use super::*;
    use crate::error::DirectoryError;
    use std::sync::RwLock;

    /// Review store kept in process memory
    #[derive(Default)]
    pub struct MemoryReviewStore {
        reviews: RwLock<Vec<Review>>,
    }

    impl MemoryReviewStore {
        /// Create an empty in-memory store
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of stored reviews
        pub fn len(&self) -> Result<usize> {
            Ok(self.reviews.read().map_err(poisoned)?.len())
        }

        pub fn is_empty(&self) -> Result<bool> {
            Ok(self.len()? == 0)
        }
    }

    fn poisoned(_: impl std::fmt::Display) -> DirectoryError {
        DirectoryError::Unavailable("review store lock poisoned".to_string())
    }

    impl ReviewStore for MemoryReviewStore {
        fn append(&self, draft: ReviewDraft) -> Result<Review> {
            let mut reviews = self.reviews.write().map_err(poisoned)?;
            let review = draft.into_review();
            reviews.push(review.clone());
            Ok(review)
        }

        fn query_by_target(&self, target_id: &ServiceId) -> Result<Vec<Review>> {
            let reviews = self.reviews.read().map_err(poisoned)?;
            let mut matching: Vec<Review> = reviews
                .iter()
                .filter(|r| &r.target_id == target_id)
                .cloned()
                .collect();
            sort_newest_first(&mut matching);
            Ok(matching)
        }

        fn query_by_targets(
            &self,
            target_ids: &[ServiceId],
        ) -> Result<HashMap<ServiceId, Vec<Review>>> {
            let reviews = self.reviews.read().map_err(poisoned)?;
            Ok(group_by_target(reviews.iter().cloned(), target_ids))
        }
    }

}
