//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p avatar-api`.

pub mod logs;
pub mod storage;

use avatar_api::setup::routes;
use avatar_api::state::AppState;
use avatar_core::{AvatarServiceConfig, Config};
use avatar_storage::{LocalStorage, Storage};
use axum_test::TestServer;
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;

pub use storage::MockStorage;

pub const TEST_BASE_URL: &str = "http://localhost:3000/media";

/// Test application: server plus owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
    pub _temp_dir: Option<TempDir>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Configuration for tests; no environment variables are read.
pub fn create_test_config(vars: &[(&str, &str)]) -> Config {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = AvatarServiceConfig::from_lookup(|key| map.get(key).cloned())
        .expect("Failed to build test config");
    Config(Box::new(config))
}

/// Build the real router around the given storage.
pub fn setup_test_app_with(storage: Arc<dyn Storage>, config: Config) -> TestApp {
    let state = Arc::new(AppState::new(config.clone(), storage));
    let app = routes::setup_routes(&config, state.clone());
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        state,
        _temp_dir: None,
    }
}

/// App backed by a recording mock storage.
pub fn setup_mock_app(storage: Arc<MockStorage>) -> TestApp {
    setup_test_app_with(storage, create_test_config(&[]))
}

/// App backed by real local storage in a temp directory.
pub async fn setup_local_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(temp_dir.path(), TEST_BASE_URL.to_string())
            .await
            .expect("Failed to create local storage"),
    );
    let storage_path = temp_dir.path().to_string_lossy().to_string();
    let config = create_test_config(&[
        ("STORAGE_BACKEND", "local"),
        ("LOCAL_STORAGE_PATH", storage_path.as_str()),
        ("LOCAL_STORAGE_BASE_URL", TEST_BASE_URL),
    ]);

    let mut app = setup_test_app_with(storage, config);
    app._temp_dir = Some(temp_dir);
    app
}
