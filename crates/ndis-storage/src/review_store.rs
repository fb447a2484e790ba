//! JSON file storage for reviews

use chrono::{DateTime, Utc};
use ndis_core::error::{DirectoryError, Result};
use ndis_core::review::{group_by_target, sort_newest_first, Review, ReviewDraft, ReviewStore};
use ndis_core::types::ServiceId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// Current on-disk schema version
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// On-disk envelope for the review log
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewFile {
    schema_version: u32,
    updated_at: DateTime<Utc>,
    reviews: Vec<Review>,
}

impl ReviewFile {
    fn new(reviews: Vec<Review>) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            updated_at: Utc::now(),
            reviews,
        }
    }
}

/// Either the versioned envelope or a bare array of reviews
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredReviews {
    Versioned(ReviewFile),
    Legacy(Vec<Review>),
}

/// Review store backed by a single JSON file
///
/// Every append rewrites the file through a temp file and rename, so a
/// reader sees either the old or the new log, never a partial one.
pub struct JsonFileReviewStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileReviewStore {
    /// Open (and create if needed) the review file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        };
        store.ensure_file()?;
        Ok(store)
    }

    /// Path of the review file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_file(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    DirectoryError::unavailable("Failed to create data directory", e)
                })?;
                debug!("Created data directory: {:?}", parent);
            }
        }

        if !self.path.exists() {
            self.atomic_write(Vec::new())?;
            info!("Initialized review file at {:?}", self.path);
        }
        Ok(())
    }

    /// Get a temporary path for atomic writes
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("reviews.json");
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    /// Write the full log atomically (write to temp, then rename)
    fn atomic_write(&self, reviews: Vec<Review>) -> Result<()> {
        let temp_path = self.temp_path();
        let file = ReviewFile::new(reviews);

        let temp_file = fs::File::create(&temp_path)
            .map_err(|e| DirectoryError::unavailable("Failed to create temp file", e))?;
        let mut writer = BufWriter::new(temp_file);
        serde_json::to_writer_pretty(&mut writer, &file)
            .map_err(|e| DirectoryError::unavailable("Failed to encode reviews", e))?;
        writer
            .flush()
            .map_err(|e| DirectoryError::unavailable("Failed to flush reviews", e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| DirectoryError::unavailable("Failed to sync reviews", e))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            DirectoryError::unavailable("Failed to rename temp file", e)
        })?;

        debug!("Wrote {} reviews to {:?}", file.reviews.len(), self.path);
        Ok(())
    }

    /// Read all reviews in append order
    fn read_all(&self) -> Result<Vec<Review>> {
        let file = fs::File::open(&self.path)
            .map_err(|e| DirectoryError::unavailable("Failed to open review file", e))?;
        let stored: StoredReviews = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| DirectoryError::unavailable("Failed to parse review file", e))?;

        match stored {
            StoredReviews::Versioned(file) => {
                if file.schema_version > CURRENT_SCHEMA_VERSION {
                    return Err(DirectoryError::UnsupportedSchemaVersion(file.schema_version));
                }
                debug!(
                    "Read {} reviews from {:?} (updated {})",
                    file.reviews.len(),
                    self.path,
                    file.updated_at
                );
                Ok(file.reviews)
            }
            StoredReviews::Legacy(reviews) => {
                warn!(
                    "Review file {:?} has no schema version; it will be upgraded on next write",
                    self.path
                );
                Ok(reviews)
            }
        }
    }
}

impl ReviewStore for JsonFileReviewStore {
    fn append(&self, draft: ReviewDraft) -> Result<Review> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| DirectoryError::Unavailable("review file lock poisoned".to_string()))?;

        let mut reviews = self.read_all()?;
        let review = draft.into_review();
        reviews.push(review.clone());
        self.atomic_write(reviews)?;
        Ok(review)
    }

    fn query_by_target(&self, target_id: &ServiceId) -> Result<Vec<Review>> {
        let mut matching: Vec<Review> = self
            .read_all()?
            .into_iter()
            .filter(|r| &r.target_id == target_id)
            .collect();
        sort_newest_first(&mut matching);
        Ok(matching)
    }

    fn query_by_targets(
        &self,
        target_ids: &[ServiceId],
    ) -> Result<HashMap<ServiceId, Vec<Review>>> {
        Ok(group_by_target(self.read_all()?, target_ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndis_core::review::{ReviewRequest, ReviewService, ReviewValidator};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    fn create_test_store() -> (JsonFileReviewStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileReviewStore::new(temp_dir.path().join("data/reviews.json")).unwrap();
        (store, temp_dir)
    }

    fn draft(target: &str, rating: i64, comment: &str) -> ReviewDraft {
        ReviewValidator::new()
            .validate(ReviewRequest::new(target, rating, comment, "Robin"))
            .unwrap()
    }

    #[test]
    fn test_store_creation() {
        let (store, _temp) = create_test_store();
        assert!(store.path().exists());
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("schemaVersion"));
    }

    #[test]
    fn test_append_and_query() {
        let (store, _temp) = create_test_store();
        let created = store.append(draft("1", 5, "Wonderful")).unwrap();
        store.append(draft("2", 3, "Average")).unwrap();

        let reviews = store.query_by_target(&ServiceId::from("1")).unwrap();
        assert_eq!(reviews, vec![created]);
    }

    #[test]
    fn test_unknown_target_is_empty() {
        let (store, _temp) = create_test_store();
        assert!(store
            .query_by_target(&ServiceId::from("nobody"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_newest_first() {
        let (store, _temp) = create_test_store();
        store.append(draft("1", 5, "older")).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        store.append(draft("1", 2, "newer")).unwrap();

        let reviews = store.query_by_target(&ServiceId::from("1")).unwrap();
        assert_eq!(reviews[0].comment, "newer");
        assert_eq!(reviews[1].comment, "older");
    }

    #[test]
    fn test_query_by_targets_matches_single_queries() {
        let (store, _temp) = create_test_store();
        store.append(draft("1", 5, "first")).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        store.append(draft("2", 3, "other")).unwrap();
        store.append(draft("1", 2, "second")).unwrap();

        let ids = [ServiceId::from("1"), ServiceId::from("2"), ServiceId::from("3")];
        let grouped = store.query_by_targets(&ids).unwrap();
        for id in &ids {
            assert_eq!(grouped[id], store.query_by_target(id).unwrap());
        }
        assert_eq!(grouped[&ids[0]][0].comment, "second");
        assert!(grouped[&ids[2]].is_empty());
    }

    #[test]
    fn test_numeric_target_matches_text_query() {
        let (store, _temp) = create_test_store();
        let request = ReviewRequest::new(ServiceId::from(12u64), 4, "Listed by number", "Robin");
        store
            .append(ReviewValidator::new().validate(request).unwrap())
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\"targetId\": 12"));
        assert_eq!(store.query_by_target(&ServiceId::from("12")).unwrap().len(), 1);
    }

    #[test]
    fn test_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reviews.json");

        let created = {
            let store = JsonFileReviewStore::new(&path).unwrap();
            store.append(draft("7", 4, "Kept")).unwrap()
        };

        let reopened = JsonFileReviewStore::new(&path).unwrap();
        let reviews = reopened.query_by_target(&ServiceId::from("7")).unwrap();
        assert_eq!(reviews, vec![created]);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let (store, _temp) = create_test_store();
        store.append(draft("1", 4, "ok")).unwrap();
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_rating_stored_as_integer() {
        let (store, _temp) = create_test_store();
        store.append(draft("1", 4, "ok")).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["reviews"][0]["rating"], 4);
        assert_eq!(raw["reviews"][0]["targetId"], "1");
    }

    #[test]
    fn test_reads_legacy_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reviews.json");
        fs::write(&path, "[]").unwrap();

        let store = JsonFileReviewStore::new(&path).unwrap();
        assert!(store.query_by_target(&ServiceId::from("1")).unwrap().is_empty());

        store.append(draft("1", 5, "upgraded")).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("schemaVersion"));
    }

    #[test]
    fn test_corrupt_file_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reviews.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileReviewStore::new(&path).unwrap();
        let err = store.query_by_target(&ServiceId::from("1")).unwrap_err();
        assert!(err.is_unavailable());
        assert!(store.append(draft("1", 5, "x")).unwrap_err().is_unavailable());
    }

    #[test]
    fn test_newer_schema_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reviews.json");
        fs::write(
            &path,
            r#"{"schemaVersion": 99, "updatedAt": "2024-01-01T00:00:00Z", "reviews": []}"#,
        )
        .unwrap();

        let store = JsonFileReviewStore::new(&path).unwrap();
        let err = store.query_by_target(&ServiceId::from("1")).unwrap_err();
        assert!(matches!(err, DirectoryError::UnsupportedSchemaVersion(99)));
    }

    #[test]
    fn test_concurrent_appends() {
        let (store, _temp) = create_test_store();
        let service = ReviewService::with_store(Arc::new(store));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let service = service.clone();
                thread::spawn(move || {
                    service
                        .add_review("busy", (i % 5) + 1, "parallel", "writer")
                        .unwrap()
                })
            })
            .collect();

        let ids: HashSet<_> = handles
            .into_iter()
            .map(|h| h.join().unwrap().id)
            .collect();
        assert_eq!(ids.len(), 8);

        let stored = service.get_reviews(&ServiceId::from("busy")).unwrap();
        assert_eq!(stored.len(), 8);
    }
}
