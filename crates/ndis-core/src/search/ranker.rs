//! Search ranking

use std::cmp::Ordering;

/// Anything the search ranker can order
pub trait Rankable {
    /// Featured listings always sort ahead of the rest
    fn is_featured(&self) -> bool;
    fn average_rating(&self) -> f64;
    fn review_count(&self) -> usize;
}

/// Compare two entries: featured first, then rating, then review count
pub fn compare<T: Rankable>(a: &T, b: &T) -> Ordering {
    b.is_featured()
        .cmp(&a.is_featured())
        .then_with(|| b.average_rating().total_cmp(&a.average_rating()))
        .then_with(|| b.review_count().cmp(&a.review_count()))
}

/// Order entries for presentation
///
/// The sort is stable, so entries equal on every key keep their input order.
pub fn rank<T: Rankable>(mut entries: Vec<T>) -> Vec<T> {
    entries.sort_by(compare);
    entries
}
