//! Storage abstraction trait
//!
//! This module defines the ObjectStore trait that all storage backends must
//! implement.

use async_trait::async_trait;
use bytes::Bytes;
use studygate_core::StorageBackend;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) must implement this trait so
/// the upload coordinator can work against any backend without coupling to
/// implementation details.
///
/// The interface is deliberately narrow: the submission pipeline only ever
/// writes blobs and resolves their public URLs. There is no `delete`;
/// uploads orphaned by a failed persistence step are an accepted leak.
///
/// **Key format:** see the crate root documentation; keys come from
/// [`crate::keys::generate_storage_key`].
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store a blob under a caller-chosen key. There is no overwrite
    /// protection beyond caller-side key uniqueness.
    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> StorageResult<()>;

    /// Publicly resolvable URL for a stored key.
    fn public_url(&self, key: &str) -> String;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
