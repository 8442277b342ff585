// Library exports for the Lambda binaries and integration tests
pub mod config;
pub mod handlers;
pub mod storage;
pub mod telemetry;
pub mod types;

// Re-export commonly used types
pub use config::{Cli, Config, RecordScope, StorageConfig, WriteMode};
pub use handlers::{DecodedBatch, SidecarGenerator, StreamDecoder};
pub use storage::{InMemoryStorage, ObjectStore, PutObjectRequest, S3Backend};
pub use types::{KinesisEvent, MetadataRecord, S3Notification, SidecarOutcome};
