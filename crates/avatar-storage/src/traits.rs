//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use std::fmt::{Display, Formatter, Result as FmtResult};
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

impl StorageError {
    /// The backend's own message, without the variant prefix
    pub fn message(&self) -> String {
        match self {
            StorageError::UploadFailed(msg)
            | StorageError::InvalidKey(msg)
            | StorageError::BackendError(msg)
            | StorageError::ConfigError(msg) => msg.clone(),
            StorageError::IoError(err) => err.to_string(),
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Who may read a stored blob. Only public blobs are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlobAccess {
    #[default]
    Public,
}

impl Display for BlobAccess {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            BlobAccess::Public => write!(f, "public"),
        }
    }
}

/// Options accepted by [`Storage::put`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutOptions {
    pub access: BlobAccess,
    pub content_type: String,
    /// When false, a put to an existing key replaces the object in place.
    pub add_random_suffix: bool,
}

impl PutOptions {
    /// Public blob at exactly the requested key
    pub fn public(content_type: impl Into<String>) -> Self {
        Self {
            access: BlobAccess::Public,
            content_type: content_type.into(),
            add_random_suffix: false,
        }
    }
}

/// Outcome of a successful put
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutBlobResult {
    /// Public URL of the stored object
    pub url: String,
    /// Key the object was finally stored under (differs from the requested
    /// key only when a random suffix was added)
    pub key: String,
    pub content_type: String,
}

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) implement this trait, so the
/// upload handler never couples to a specific provider.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `data` under `key` and return its public URL.
    async fn put(&self, key: &str, data: Bytes, options: &PutOptions)
        -> StorageResult<PutBlobResult>;

    /// Check if an object exists
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
