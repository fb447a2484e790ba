//! Review data models

use crate::types::{Rating, ReviewId, ServiceId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A star-rating review left for a listed service
///
/// Reviews are immutable once appended to a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review identifier
    pub id: ReviewId,
    /// Service being reviewed (not checked against the catalog)
    pub target_id: ServiceId,
    /// Star rating
    pub rating: Rating,
    /// Review text
    pub comment: String,
    /// Display name of the reviewer
    pub author: String,
    /// Name of the service at submission time, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    /// When the review was stored
    pub created_at: DateTime<Utc>,
}

/// Raw review submission, as received from a caller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub target_id: ServiceId,
    pub rating: i64,
    pub comment: String,
    pub author: String,
    #[serde(default)]
    pub provider_name: Option<String>,
}

impl ReviewRequest {
    pub fn new(
        target_id: impl Into<ServiceId>,
        rating: i64,
        comment: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            target_id: target_id.into(),
            rating,
            comment: comment.into(),
            author: author.into(),
            provider_name: None,
        }
    }

    /// Attach the provider's display name
    pub fn provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = Some(name.into());
        self
    }
}

/// A validated, trimmed submission waiting for an id and timestamp
///
/// Only [`ReviewValidator`](super::ReviewValidator) produces drafts, so every
/// draft a store receives already satisfies the rating and non-empty rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub(crate) target_id: ServiceId,
    pub(crate) rating: Rating,
    pub(crate) comment: String,
    pub(crate) author: String,
    pub(crate) provider_name: Option<String>,
}

impl ReviewDraft {
    pub fn target_id(&self) -> &ServiceId {
        &self.target_id
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Assign a fresh id and the current time
    pub fn into_review(self) -> Review {
        self.into_review_at(Utc::now())
    }

    /// Assign a fresh id and the given creation time
    pub fn into_review_at(self, created_at: DateTime<Utc>) -> Review {
        Review {
            id: ReviewId::new(),
            target_id: self.target_id,
            rating: self.rating,
            comment: self.comment,
            author: self.author,
            provider_name: self.provider_name,
            created_at,
        }
    }
}
