use crate::types::{DecodeError, KinesisEvent, KinesisEventRecord};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Outcome of decoding one stream batch
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DecodedBatch {
    /// Decoded payloads, in input order
    pub payloads: Vec<String>,
    pub failed: usize,
}

/// Decodes and logs base64 stream payloads
#[derive(Debug, Default, Clone, Copy)]
pub struct StreamDecoder;

impl StreamDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode every record in order. A bad record is logged and skipped;
    /// the batch always completes.
    pub fn handle(&self, event: &KinesisEvent) -> DecodedBatch {
        match serde_json::to_string(event) {
            Ok(json) => tracing::info!("Received stream event: {}", json),
            Err(e) => tracing::warn!("Received stream event (unserializable: {})", e),
        }

        let mut batch = DecodedBatch::default();

        for (index, record) in event.records.iter().enumerate() {
            match decode_record(record) {
                Ok(payload) => {
                    tracing::info!("{}", payload);
                    batch.payloads.push(payload);
                }
                Err(e) => {
                    tracing::warn!(
                        "Skipping record {} (partition key: {:?}, sequence number: {:?}): {}",
                        index,
                        record.kinesis.partition_key,
                        record.kinesis.sequence_number,
                        e
                    );
                    batch.failed += 1;
                }
            }
        }

        tracing::info!(
            "Decoded {} of {} records ({} failed)",
            batch.payloads.len(),
            event.records.len(),
            batch.failed
        );

        batch
    }
}

pub fn decode_record(record: &KinesisEventRecord) -> Result<String, DecodeError> {
    let data = record
        .kinesis
        .data
        .as_deref()
        .ok_or(DecodeError::MissingData)?;
    let bytes = STANDARD.decode(data.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}
