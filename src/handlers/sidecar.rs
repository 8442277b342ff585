use crate::config::{RecordScope, WriteMode};
use crate::storage::{ObjectStore, PutObjectRequest};
use crate::types::{
    HandlerError, MetadataRecord, S3Notification, S3NotificationRecord, SidecarOutcome,
    is_sidecar_key, sidecar_key,
};
use bytes::Bytes;
use std::sync::Arc;

const SIDECAR_CONTENT_TYPE: &str = "text/plain";
const SIDECAR_ENCRYPTION: &str = "AES256";
const OBJECT_CREATED_PREFIX: &str = "ObjectCreated";

/// Writes a metadata sidecar next to every newly created object
#[derive(Clone)]
pub struct SidecarGenerator {
    storage: Arc<dyn ObjectStore>,
    write_mode: WriteMode,
    record_scope: RecordScope,
    decode_keys: bool,
}

impl SidecarGenerator {
    pub fn new(
        storage: Arc<dyn ObjectStore>,
        write_mode: WriteMode,
        record_scope: RecordScope,
    ) -> Self {
        tracing::info!(
            "Initializing SidecarGenerator (write_mode: {:?}, record_scope: {:?})",
            write_mode,
            record_scope
        );

        Self {
            storage,
            write_mode,
            record_scope,
            decode_keys: false,
        }
    }

    /// URL-decode notification keys before use. Off by default: the key is
    /// used exactly as the notification delivers it.
    pub fn with_key_decoding(mut self, decode_keys: bool) -> Self {
        self.decode_keys = decode_keys;
        self
    }

    /// Process one notification and return its completion message.
    ///
    /// Each processed record yields exactly one outcome; the message is built
    /// from those outcomes once, joined by newlines in record order.
    pub async fn handle(&self, notification: &S3Notification) -> Result<String, HandlerError> {
        let records = match self.record_scope {
            RecordScope::All => &notification.records[..],
            RecordScope::First => &notification.records[..notification.records.len().min(1)],
        };

        if records.is_empty() {
            tracing::warn!("Received notification without records");
            return Err(HandlerError::EmptyBatch);
        }

        if records.len() < notification.records.len() {
            tracing::warn!(
                "Processing only the first of {} records",
                notification.records.len()
            );
        }

        let mut messages = Vec::with_capacity(records.len());
        for record in records {
            let outcome = self.process_record(record).await;
            messages.push(outcome.message());
        }

        Ok(messages.join("\n"))
    }

    pub async fn process_record(&self, record: &S3NotificationRecord) -> SidecarOutcome {
        let object = &record.s3.object;
        let bucket = &record.s3.bucket.name;
        let key = if self.decode_keys {
            decode_object_key(&object.key)
        } else {
            object.key.clone()
        };

        if is_sidecar_key(&key) {
            tracing::info!("Skipping sidecar object s3://{}/{}", bucket, key);
            return SidecarOutcome::Skipped { key };
        }

        if let Some(event_name) = record.event_name.as_deref()
            && !event_name.starts_with(OBJECT_CREATED_PREFIX)
        {
            tracing::info!("Skipping {} event for s3://{}/{}", event_name, bucket, key);
            return SidecarOutcome::Skipped { key };
        }

        let sidecar_key = sidecar_key(&key);
        let metadata = MetadataRecord {
            object_key: key,
            object_size: object.size,
            object_etag: object.e_tag.clone(),
            object_creation_time: record.event_time.clone(),
        };

        let request = PutObjectRequest {
            bucket: bucket.clone(),
            key: sidecar_key.clone(),
            body: Bytes::from(metadata.to_json()),
            content_type: SIDECAR_CONTENT_TYPE.to_string(),
            server_side_encryption: Some(SIDECAR_ENCRYPTION.to_string()),
        };

        match self.write_mode {
            WriteMode::Sync => {
                write_sidecar(self.storage.as_ref(), request).await;
                SidecarOutcome::Written { sidecar_key }
            }
            WriteMode::FireAndForget => {
                let storage = Arc::clone(&self.storage);
                tokio::spawn(async move {
                    write_sidecar(storage.as_ref(), request).await;
                });
                SidecarOutcome::Dispatched { sidecar_key }
            }
        }
    }
}

/// Write a sidecar; failures are logged and never propagated
async fn write_sidecar(storage: &dyn ObjectStore, request: PutObjectRequest) {
    let bucket = request.bucket.clone();
    let key = request.key.clone();

    match storage.put_object(request).await {
        Ok(etag) => {
            tracing::info!("Metadata uploaded to s3://{}/{} (etag {})", bucket, key, etag);
        }
        Err(e) => {
            tracing::error!("Error uploading metadata to s3://{}/{}: {}", bucket, key, e);
        }
    }
}

/// S3 notification keys are form-encoded: `+` is a space, the rest percent-encoded
fn decode_object_key(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    match urlencoding::decode(&plus_decoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            tracing::warn!("Unable to decode object key {}: {}", raw, e);
            raw.to_string()
        }
    }
}
