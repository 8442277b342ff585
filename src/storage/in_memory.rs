use super::backend::{ObjectStore, PutObjectRequest};
use crate::types::StorageError;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory object store for testing/development
#[derive(Clone)]
pub struct InMemoryStorage {
    objects: Arc<RwLock<HashMap<(String, String), StoredObject>>>,
}

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub data: Bytes,
    pub etag: String,
    pub content_type: String,
    pub server_side_encryption: Option<String>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            objects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn calculate_etag(data: &[u8]) -> String {
        use sha2::{Digest, Sha256};
        let hash = Sha256::digest(data);
        format!("\"{}\"", hex::encode(hash))
    }

    pub async fn get_object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        let objects = self.objects.read().await;
        objects
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    /// Keys stored in a bucket, sorted
    pub async fn list_keys(&self, bucket: &str) -> Vec<String> {
        let objects = self.objects.read().await;
        let mut keys: Vec<String> = objects
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, key)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl ObjectStore for InMemoryStorage {
    async fn put_object(&self, request: PutObjectRequest) -> Result<String, StorageError> {
        if request.bucket.is_empty() {
            return Err(StorageError::NoSuchBucket(request.bucket));
        }

        let etag = Self::calculate_etag(&request.body);

        let stored_object = StoredObject {
            data: request.body,
            etag: etag.clone(),
            content_type: request.content_type,
            server_side_encryption: request.server_side_encryption,
        };

        let mut objects = self.objects.write().await;
        objects.insert((request.bucket, request.key), stored_object);

        Ok(etag)
    }
}
