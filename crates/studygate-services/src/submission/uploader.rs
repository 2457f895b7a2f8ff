//! Asset upload coordination.
//!
//! Turns a locally selected file into a durable object-store location.
//! Failures come back as values; the orchestrator decides criticality
//! (mandatory for the profile picture, best-effort for documents).

use std::sync::Arc;
use studygate_core::models::{LocalFile, UploadCategory};
use studygate_storage::{generate_storage_key, ObjectStore, StorageError};
use thiserror::Error;

/// One failed upload.
#[derive(Debug, Error)]
#[error("upload of {filename} failed: {source}")]
pub struct UploadError {
    pub filename: String,
    #[source]
    pub source: StorageError,
}

/// Uploads selected files under fresh collision-resistant keys.
#[derive(Clone)]
pub struct AssetUploader {
    store: Arc<dyn ObjectStore>,
}

impl AssetUploader {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Upload one file and return its public URL.
    ///
    /// Exactly one blob is created in the object store per call. Uploads for
    /// independent files are order-independent and may run concurrently.
    /// Partially uploaded blobs are not cleaned up.
    pub async fn upload(
        &self,
        file: &LocalFile,
        category: UploadCategory,
    ) -> Result<String, UploadError> {
        let key = generate_storage_key(category, &file.filename);

        self.store
            .put(&key, &file.content_type, file.bytes.clone())
            .await
            .map_err(|source| UploadError {
                filename: file.filename.clone(),
                source,
            })?;

        let url = self.store.public_url(&key);

        tracing::info!(
            filename = %file.filename,
            key = %key,
            url = %url,
            category = ?category,
            "Asset uploaded"
        );

        Ok(url)
    }
}
