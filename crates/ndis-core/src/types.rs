//! Core type definitions for ndis-directory

use crate::error::{DirectoryError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Lowest accepted star rating
pub const MIN_RATING: i64 = 1;

/// Highest accepted star rating
pub const MAX_RATING: i64 = 5;

/// Unique identifier for a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId(pub Uuid);

impl ReviewId {
    /// Generate a new ReviewId
    pub fn new() -> Self {
        ReviewId(Uuid::new_v4())
    }

    /// Create from UUID string
    pub fn from_string(s: &str) -> std::result::Result<Self, uuid::Error> {
        Ok(ReviewId(Uuid::parse_str(s)?))
    }
}

impl Default for ReviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a listed service (the review target)
///
/// Listing files carry ids as either JSON numbers or strings. Both compare
/// by their text so `12` and `"12"` match, and each serializes back in the
/// form it was read in.
#[derive(Debug, Clone)]
pub struct ServiceId {
    value: String,
    numeric: bool,
}

impl ServiceId {
    /// Create a ServiceId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        ServiceId {
            value: s.into().trim().to_string(),
            numeric: false,
        }
    }

    /// Create a ServiceId that serializes as a JSON number
    pub fn from_number(n: i64) -> Self {
        ServiceId {
            value: n.to_string(),
            numeric: true,
        }
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether the id was given as a JSON number
    pub fn is_numeric(&self) -> bool {
        self.numeric
    }
}

impl PartialEq for ServiceId {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for ServiceId {}

impl Hash for ServiceId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for ServiceId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ServiceId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Serialize for ServiceId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.value.parse::<i64>() {
            Ok(n) if self.numeric => serializer.serialize_i64(n),
            _ => serializer.serialize_str(&self.value),
        }
    }
}

impl<'de> Deserialize<'de> for ServiceId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => ServiceId::from_number(n),
            RawId::Text(s) => ServiceId::from_string(s),
        })
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<&str> for ServiceId {
    fn from(s: &str) -> Self {
        ServiceId::from_string(s)
    }
}

impl From<u64> for ServiceId {
    fn from(n: u64) -> Self {
        ServiceId {
            value: n.to_string(),
            numeric: i64::try_from(n).is_ok(),
        }
    }
}

/// Star rating, always an integer in 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Validate an integer rating
    pub fn new(value: i64) -> Result<Self> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(DirectoryError::Validation(format!(
                "Rating must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, value
            )));
        }
        Ok(Rating(value as u8))
    }

    /// Parse a rating from text; fractional or non-numeric input is rejected
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value: i64 = trimmed.parse().map_err(|_| {
            DirectoryError::Validation(format!(
                "Rating must be a whole number between {} and {}, got '{}'",
                MIN_RATING, MAX_RATING, trimmed
            ))
        })?;
        Self::new(value)
    }

    /// Numeric value
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Filled/empty star string, e.g. "★★★☆☆"
    pub fn stars(&self) -> String {
        let filled = self.0 as usize;
        let empty = MAX_RATING as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl TryFrom<i64> for Rating {
    type Error = DirectoryError;

    fn try_from(value: i64) -> Result<Self> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_RATING)
    }
}
