use serde::{Deserialize, Serialize};

/// Marker that identifies a sidecar key
pub const SIDECAR_MARKER: &str = "metadata.txt";

/// Suffix appended to a source key to form its sidecar key
pub const SIDECAR_SUFFIX: &str = "-metadata.txt";

/// Object-created notification batch as delivered by S3
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Notification {
    #[serde(rename = "Records", default)]
    pub records: Vec<S3NotificationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3NotificationRecord {
    #[serde(default)]
    pub event_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Object {
    pub key: String,
    #[serde(default)]
    pub size: u64,
    #[serde(rename = "eTag", default)]
    pub e_tag: String,
}

/// Metadata describing a source object, written as the sidecar body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    #[serde(rename = "objectKey")]
    pub object_key: String,
    #[serde(rename = "objectSize")]
    pub object_size: u64,
    #[serde(rename = "objectETag")]
    pub object_etag: String,
    #[serde(rename = "objectCreationTime")]
    pub object_creation_time: String,
}

impl MetadataRecord {
    /// Compact JSON with fields in declaration order. String fields are
    /// escaped through `serde_json::Value`, whose `Display` cannot fail.
    pub fn to_json(&self) -> String {
        format!(
            r#"{{"objectKey":{},"objectSize":{},"objectETag":{},"objectCreationTime":{}}}"#,
            serde_json::Value::from(self.object_key.as_str()),
            self.object_size,
            serde_json::Value::from(self.object_etag.as_str()),
            serde_json::Value::from(self.object_creation_time.as_str()),
        )
    }
}

/// Returns true if the key looks like a sidecar and must not produce another one
pub fn is_sidecar_key(key: &str) -> bool {
    key.contains(SIDECAR_MARKER)
}

pub fn sidecar_key(key: &str) -> String {
    format!("{}{}", key, SIDECAR_SUFFIX)
}

/// Result of processing one notification record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidecarOutcome {
    /// The record did not qualify; nothing was written
    Skipped { key: String },
    /// The sidecar write was awaited (its failure, if any, was logged)
    Written { sidecar_key: String },
    /// The sidecar write was handed to a background task
    Dispatched { sidecar_key: String },
}

impl SidecarOutcome {
    /// Completion message reported for this record
    pub fn message(&self) -> String {
        match self {
            SidecarOutcome::Skipped { key } => format!("{} ignored.", key),
            SidecarOutcome::Written { sidecar_key }
            | SidecarOutcome::Dispatched { sidecar_key } => {
                format!("{} uploaded successfully.", sidecar_key)
            }
        }
    }
}

/// Kinesis stream batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinesisEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<KinesisEventRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinesisEventRecord {
    pub kinesis: KinesisRecord,
    #[serde(rename = "eventID", default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

/// The payload is kept as raw base64 text so one bad record cannot fail the batch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KinesisRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
}
