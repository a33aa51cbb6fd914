//! Storage setup and initialization

use anyhow::Result;
use avatar_core::Config;
use avatar_storage::{create_storage, Storage};
use std::sync::Arc;

/// Build the configured blob storage backend.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!(
        backend = %config.storage_backend(),
        "Initializing storage..."
    );
    let storage = create_storage(config).await?;
    tracing::info!(
        backend = ?storage.backend_type(),
        "Storage initialized successfully"
    );
    Ok(storage)
}
