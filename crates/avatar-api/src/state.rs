//! Application state shared by every handler.

use avatar_core::Config;
use avatar_storage::Storage;
use std::sync::Arc;

/// Immutable per-process state; requests share it behind an `Arc` and never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        Self { config, storage }
    }
}
