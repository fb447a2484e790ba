//! Review validation

use super::model::{ReviewDraft, ReviewRequest};
use crate::config::ReviewConfig;
use crate::error::{DirectoryError, Result};
use crate::types::Rating;

/// Maximum comment length (default)
pub const MAX_COMMENT_LENGTH: usize = 2000;

/// Maximum author name length (default)
pub const MAX_AUTHOR_LENGTH: usize = 255;

/// Validator for review submissions
#[derive(Debug, Clone)]
pub struct ReviewValidator {
    max_comment_length: usize,
    max_author_length: usize,
}

impl ReviewValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self {
            max_comment_length: MAX_COMMENT_LENGTH,
            max_author_length: MAX_AUTHOR_LENGTH,
        }
    }

    /// Create a validator from configuration
    pub fn from_config(config: &ReviewConfig) -> Self {
        Self {
            max_comment_length: config.max_comment_length,
            max_author_length: config.max_author_length,
        }
    }

    /// Validate a required text field and return it trimmed
    fn validate_text(&self, field: &str, value: &str, max_length: usize) -> Result<String> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(DirectoryError::Validation(format!(
                "{} cannot be empty",
                field
            )));
        }

        if trimmed.chars().count() > max_length {
            return Err(DirectoryError::Validation(format!(
                "{} exceeds maximum length of {} characters",
                field, max_length
            )));
        }

        Ok(trimmed.to_string())
    }

    pub fn validate_comment(&self, comment: &str) -> Result<String> {
        self.validate_text("Comment", comment, self.max_comment_length)
    }

    pub fn validate_author(&self, author: &str) -> Result<String> {
        self.validate_text("Author", author, self.max_author_length)
    }

    /// Validate a complete submission
    pub fn validate(&self, request: ReviewRequest) -> Result<ReviewDraft> {
        if request.target_id.as_str().is_empty() {
            return Err(DirectoryError::Validation(
                "Service id cannot be empty".to_string(),
            ));
        }

        let rating = Rating::new(request.rating)?;
        let comment = self.validate_comment(&request.comment)?;
        let author = self.validate_author(&request.author)?;

        // Blank provider names are dropped rather than rejected.
        let provider_name = request
            .provider_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(ReviewDraft {
            target_id: request.target_id,
            rating,
            comment,
            author,
            provider_name,
        })
    }
}

impl Default for ReviewValidator {
    fn default() -> Self {
        Self::new()
    }
}
