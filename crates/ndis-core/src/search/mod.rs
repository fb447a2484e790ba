//! Search module
//!
//! Listings are enriched with a fresh rating summary, ranked, then filtered
//! by the free-text query. Nothing here is cached between requests.

pub mod ranker;

pub use ranker::{compare, rank, Rankable};

use crate::catalog::Service;
use crate::rating::RatingSummary;
use crate::review::Review;
use serde::Serialize;

/// A listing with its derived rating data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListing {
    #[serde(flatten)]
    pub service: Service,
    #[serde(flatten)]
    pub summary: RatingSummary,
    pub is_featured: bool,
}

impl ServiceListing {
    pub fn new(service: Service, summary: RatingSummary) -> Self {
        let is_featured = service.featured;
        Self {
            service,
            summary,
            is_featured,
        }
    }
}

impl Rankable for ServiceListing {
    fn is_featured(&self) -> bool {
        self.is_featured
    }

    fn average_rating(&self) -> f64 {
        self.summary.average_rating
    }

    fn review_count(&self) -> usize {
        self.summary.review_count
    }
}

/// A listing with its reviews, newest first
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetail {
    #[serde(flatten)]
    pub listing: ServiceListing,
    pub reviews: Vec<Review>,
}

/// Rank `listings`, then keep those matching `query`
pub fn search(listings: Vec<ServiceListing>, query: &str) -> Vec<ServiceListing> {
    rank(listings)
        .into_iter()
        .filter(|l| l.service.matches(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: u64, name: &str, featured: bool, avg: f64, count: usize) -> ServiceListing {
        ServiceListing::new(
            Service::new(id, name).featured(featured),
            RatingSummary {
                average_rating: avg,
                review_count: count,
            },
        )
    }

    #[test]
    fn test_search_ranks_and_filters() {
        let results = search(
            vec![
                listing(1, "Care Plus", false, 4.0, 2),
                listing(2, "Garden Helpers", true, 2.0, 1),
                listing(3, "Care Circle", false, 4.5, 1),
            ],
            "care",
        );
        let ids: Vec<&str> = results.iter().map(|l| l.service.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let results = search(
            vec![listing(1, "A", false, 1.0, 1), listing(2, "B", true, 0.0, 0)],
            "  ",
        );
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].service.id.as_str(), "2");
    }

    #[test]
    fn test_listing_serialization() {
        let json = serde_json::to_value(listing(5, "Five", true, 4.7, 3)).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["name"], "Five");
        assert_eq!(json["averageRating"], 4.7);
        assert_eq!(json["reviewCount"], 3);
        assert_eq!(json["isFeatured"], true);
    }
}
