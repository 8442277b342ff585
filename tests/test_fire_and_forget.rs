mod helpers;

use helpers::{FailingStorage, RecordingStorage, notification};
use metasidecar::{RecordScope, SidecarGenerator, SidecarOutcome, WriteMode};
use std::sync::Arc;

fn generator(storage: Arc<dyn metasidecar::ObjectStore>) -> SidecarGenerator {
    SidecarGenerator::new(storage, WriteMode::FireAndForget, RecordScope::All)
}

#[tokio::test]
async fn test_write_is_dispatched_and_eventually_stored() {
    let storage = RecordingStorage::new();
    let generator = generator(Arc::new(storage.clone()));

    let message = generator.handle(&notification(&["photo.jpg"])).await.unwrap();
    assert_eq!(message, "photo.jpg-metadata.txt uploaded successfully.");

    let requests = storage.wait_for_requests(1).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].key, "photo.jpg-metadata.txt");
}

#[tokio::test]
async fn test_outcome_is_dispatched() {
    let storage = RecordingStorage::new();
    let generator = generator(Arc::new(storage.clone()));
    let event = notification(&["a.txt"]);

    let outcome = generator.process_record(&event.records[0]).await;

    assert_eq!(
        outcome,
        SidecarOutcome::Dispatched {
            sidecar_key: "a.txt-metadata.txt".to_string()
        }
    );
}

#[tokio::test]
async fn test_skipped_key_dispatches_nothing() {
    let storage = RecordingStorage::new();
    let generator = generator(Arc::new(storage.clone()));

    let message = generator
        .handle(&notification(&["a.txt-metadata.txt"]))
        .await
        .unwrap();
    assert_eq!(message, "a.txt-metadata.txt ignored.");

    tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
    assert!(storage.requests().is_empty());
}

#[tokio::test]
async fn test_background_failure_is_not_surfaced() {
    let storage = FailingStorage::new();
    let generator = generator(Arc::new(storage.clone()));

    let message = generator.handle(&notification(&["photo.jpg"])).await.unwrap();
    assert_eq!(message, "photo.jpg-metadata.txt uploaded successfully.");

    for _ in 0..50 {
        if storage.attempts() > 0 {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
    }
    assert_eq!(storage.attempts(), 1);
}
