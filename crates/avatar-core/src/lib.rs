//! Avatar Core Library
//!
//! This crate provides the upload request model, error types and configuration
//! shared by the storage and API crates.

pub mod config;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{AvatarServiceConfig, BaseConfig, Config};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{AvatarUpload, UploadResponse};
pub use storage_types::StorageBackend;
