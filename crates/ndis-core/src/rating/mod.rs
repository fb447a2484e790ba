//! Rating aggregation
//!
//! Summary statistics derived from a set of reviews. Summaries are never
//! stored; callers recompute them from the current review set on each read.

use crate::review::Review;
use crate::types::Rating;
use serde::{Deserialize, Serialize};

/// Average rating and review count for one service
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    /// Mean rating rounded to one decimal place, 0 when unrated
    pub average_rating: f64,
    /// Number of reviews
    pub review_count: usize,
}

impl RatingSummary {
    /// Summarise a sequence of ratings
    pub fn from_ratings(ratings: impl IntoIterator<Item = Rating>) -> Self {
        let (sum, count) = ratings
            .into_iter()
            .fold((0u64, 0u64), |(sum, count), r| (sum + r.value() as u64, count + 1));

        Self {
            average_rating: rounded_mean(sum, count),
            review_count: count as usize,
        }
    }

    pub fn is_unrated(&self) -> bool {
        self.review_count == 0
    }
}

/// Summarise the ratings of `reviews`
pub fn aggregate(reviews: &[Review]) -> RatingSummary {
    RatingSummary::from_ratings(reviews.iter().map(|r| r.rating))
}

/// Mean of `sum / count` in tenths, rounded half away from zero
///
/// Done in integers: tenths = floor((20 * sum + count) / (2 * count)).
fn rounded_mean(sum: u64, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let tenths = (20 * sum + count) / (2 * count);
    tenths as f64 / 10.0
}
