use async_trait::async_trait;
use avatar_storage::{
    PutBlobResult, PutOptions, Storage, StorageBackend, StorageError, StorageResult,
};
use bytes::Bytes;
use std::sync::Mutex;

pub const MOCK_BLOB_BASE_URL: &str = "https://blob.test";

/// One recorded `put` call.
#[derive(Debug, Clone)]
pub struct RecordedPut {
    pub key: String,
    pub data: Bytes,
    pub options: PutOptions,
}

/// Storage double that records every put and can be told to fail.
#[derive(Default)]
pub struct MockStorage {
    puts: Mutex<Vec<RecordedPut>>,
    failure: Option<String>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every put fails with `StorageError::UploadFailed(message)`.
    pub fn failing(message: &str) -> Self {
        Self {
            puts: Mutex::new(Vec::new()),
            failure: Some(message.to_string()),
        }
    }

    pub fn puts(&self) -> Vec<RecordedPut> {
        self.puts.lock().unwrap().clone()
    }

    pub fn last_put(&self) -> RecordedPut {
        self.puts().pop().expect("no put recorded")
    }
}

#[async_trait]
impl Storage for MockStorage {
    async fn put(
        &self,
        key: &str,
        data: Bytes,
        options: &PutOptions,
    ) -> StorageResult<PutBlobResult> {
        self.puts.lock().unwrap().push(RecordedPut {
            key: key.to_string(),
            data,
            options: options.clone(),
        });

        if let Some(ref message) = self.failure {
            return Err(StorageError::UploadFailed(message.clone()));
        }

        Ok(PutBlobResult {
            url: format!("{}/{}", MOCK_BLOB_BASE_URL, key),
            key: key.to_string(),
            content_type: options.content_type.clone(),
        })
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self.puts.lock().unwrap().iter().any(|p| p.key == key))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
