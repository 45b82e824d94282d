use bytes::Bytes;

use skriva::application::ports::AudioStore;
use skriva::domain::{StoragePath, TranscriptId};
use skriva::infrastructure::storage::LocalAudioStore;

fn create_test_store() -> (tempfile::TempDir, LocalAudioStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalAudioStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_audio_bytes_when_storing_then_byte_count_is_returned() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::new(&TranscriptId::new(), "webm");

    let size = store
        .store(&path, Bytes::from("hello world"))
        .await
        .unwrap();

    assert_eq!(size, 11);
}

#[tokio::test]
async fn given_stored_file_when_fetching_then_bytes_match_original() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::new(&TranscriptId::new(), "wav");
    let content = b"test content";

    store.store(&path, Bytes::from(&content[..])).await.unwrap();

    let fetched = store.fetch(&path).await.unwrap();
    assert_eq!(fetched, content);
}

#[tokio::test]
async fn given_stored_file_when_deleting_then_fetch_returns_not_found() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::new(&TranscriptId::new(), "ogg");

    store.store(&path, Bytes::from("data")).await.unwrap();
    store.delete(&path).await.unwrap();

    let result = store.fetch(&path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn given_missing_file_when_fetching_then_returns_error() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::new(&TranscriptId::new(), "mp3");

    let result = store.fetch(&path).await;

    assert!(result.is_err());
}
