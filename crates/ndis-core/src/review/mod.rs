//! Review system module
//!
//! Handles review validation, storage and lookup by service.

pub mod model;
pub mod service;
pub mod store;
pub mod validator;

pub use model::*;
pub use service::ReviewService;
pub use store::memory::MemoryReviewStore;
pub use store::{group_by_target, sort_newest_first, ReviewStore};
pub use validator::ReviewValidator;
