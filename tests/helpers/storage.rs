use metasidecar::types::StorageError;
use metasidecar::{ObjectStore, PutObjectRequest};
use std::sync::{Arc, Mutex};

/// Records every put request and always succeeds
#[derive(Clone, Default)]
pub struct RecordingStorage {
    requests: Arc<Mutex<Vec<PutObjectRequest>>>,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<PutObjectRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Poll until `count` writes were seen or the deadline passes
    pub async fn wait_for_requests(&self, count: usize) -> Vec<PutObjectRequest> {
        for _ in 0..50 {
            let requests = self.requests();
            if requests.len() >= count {
                return requests;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        }
        self.requests()
    }
}

#[async_trait::async_trait]
impl ObjectStore for RecordingStorage {
    async fn put_object(&self, request: PutObjectRequest) -> Result<String, StorageError> {
        self.requests.lock().unwrap().push(request);
        Ok("\"etag\"".to_string())
    }
}

/// Counts attempts and rejects every write
#[derive(Clone, Default)]
pub struct FailingStorage {
    attempts: Arc<Mutex<usize>>,
}

impl FailingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl ObjectStore for FailingStorage {
    async fn put_object(&self, _request: PutObjectRequest) -> Result<String, StorageError> {
        *self.attempts.lock().unwrap() += 1;
        Err(StorageError::InternalError("connection reset".to_string()))
    }
}
