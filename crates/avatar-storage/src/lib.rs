//! Avatar Storage Library
//!
//! This crate provides the blob storage abstraction the upload endpoint writes
//! through, and its implementations for S3-compatible object stores and the
//! local filesystem.
//!
//! # Storage key format
//!
//! Callers choose the full key (avatars live at `avatars/{uid}/profile.{ext}`).
//! Keys must not contain `..` or a leading `/`. With `add_random_suffix` the
//! backend rewrites the final segment to `{stem}-{suffix}.{ext}`; otherwise an
//! existing object at the same key is overwritten.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use avatar_core::StorageBackend;
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{BlobAccess, PutBlobResult, PutOptions, Storage, StorageError, StorageResult};
