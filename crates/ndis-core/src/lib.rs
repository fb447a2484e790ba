//! ndis-core - Core library for ndis-directory
//!
//! This crate provides the review core of the NDIS provider directory:
//! review validation and storage, rating aggregation, search ranking,
//! and the directory service joining them with the listing catalog.

pub mod error;
pub mod types;
pub mod config;
pub mod review;
pub mod rating;
pub mod search;
pub mod catalog;
pub mod directory;

pub use error::{DirectoryError, ErrorCategory, Result};
pub use types::*;
pub use directory::Directory;
