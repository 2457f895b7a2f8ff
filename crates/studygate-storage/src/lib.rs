//! StudyGate Storage Library
//!
//! This crate provides the object-store abstraction and implementations for
//! StudyGate. It includes the ObjectStore trait and backends for S3 and the
//! local filesystem.
//!
//! # Storage key format
//!
//! Keys are category-scoped and collision-resistant:
//!
//! - **Profile pictures**: `profile-pictures/{timestamp}-{token}.{ext}`
//! - **Supporting documents**: `documents/{timestamp}-{token}.{ext}`
//!
//! The timestamp is epoch milliseconds and the token is random alphanumeric,
//! so concurrent submissions selecting files with identical original names
//! never collide. Keys must not contain `..` or a leading `/`. Key
//! generation is centralized in the `keys` module so all backends stay
//! consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_store;
pub use keys::generate_storage_key;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use studygate_core::StorageBackend;
pub use traits::{ObjectStore, StorageError, StorageResult};
