mod backend;
mod in_memory;
mod s3;

pub use backend::{ObjectStore, PutObjectRequest};
pub use in_memory::{InMemoryStorage, StoredObject};
pub use s3::S3Backend;

use crate::config::StorageConfig;
use std::sync::Arc;

/// Build the object store described by the configuration
pub async fn from_config(config: &StorageConfig) -> Arc<dyn ObjectStore> {
    match config {
        StorageConfig::S3(s3_config) => {
            tracing::info!(
                "Initializing S3 storage (region: {:?}, endpoint: {:?})",
                s3_config.region,
                s3_config.endpoint
            );
            Arc::new(
                S3Backend::new(
                    s3_config.region.clone(),
                    s3_config.endpoint.clone(),
                    s3_config.force_path_style,
                    s3_config.access_key_id.clone(),
                    s3_config.secret_access_key.clone(),
                )
                .await,
            )
        }
        StorageConfig::Memory => {
            tracing::warn!("Initializing in-memory storage; sidecars will not persist");
            Arc::new(InMemoryStorage::new())
        }
    }
}
