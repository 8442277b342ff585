#![allow(dead_code)]

mod storage;

pub use storage::{FailingStorage, RecordingStorage};

use metasidecar::types::{KinesisEventRecord, KinesisRecord};
use metasidecar::{KinesisEvent, S3Notification};

pub const TEST_BUCKET: &str = "uploads";
pub const TEST_EVENT_TIME: &str = "2024-01-01T00:00:00Z";

/// Build a notification in the shape S3 delivers it
pub fn notification(keys: &[&str]) -> S3Notification {
    let records: Vec<serde_json::Value> = keys
        .iter()
        .map(|key| {
            serde_json::json!({
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "eventTime": TEST_EVENT_TIME,
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "bucket": { "name": TEST_BUCKET },
                    "object": { "key": key, "size": 2048, "eTag": "abc123" }
                }
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({ "Records": records })).unwrap()
}

pub fn kinesis_event(payloads: &[&str]) -> KinesisEvent {
    KinesisEvent {
        records: payloads
            .iter()
            .enumerate()
            .map(|(i, data)| KinesisEventRecord {
                kinesis: KinesisRecord {
                    data: Some(data.to_string()),
                    partition_key: Some(format!("pk-{}", i)),
                    sequence_number: Some(format!("{}", 49590 + i)),
                },
                event_id: None,
            })
            .collect(),
    }
}
