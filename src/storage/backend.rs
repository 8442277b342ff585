use crate::types::StorageError;
use bytes::Bytes;

/// A single object write
#[derive(Debug, Clone)]
pub struct PutObjectRequest {
    pub bucket: String,
    pub key: String,
    pub body: Bytes,
    pub content_type: String,
    /// Server-side encryption algorithm, e.g. `AES256`
    pub server_side_encryption: Option<String>,
}

/// Object store trait - implement this for different storage backends
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store an object and return its ETag
    async fn put_object(&self, request: PutObjectRequest) -> Result<String, StorageError>;
}
