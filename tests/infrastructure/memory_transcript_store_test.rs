use skriva::application::ports::TranscriptStore;
use skriva::domain::{StoragePath, Transcript, TranscriptId};
use skriva::infrastructure::storage::InMemoryTranscriptStore;

const SMALL_CAPACITY: usize = 2;

fn transcript(text: &str) -> Transcript {
    let id = TranscriptId::new();
    Transcript::new(
        id,
        text.to_string(),
        StoragePath::new(&id, "webm"),
        "audio/webm".to_string(),
        0.9,
    )
}

#[tokio::test]
async fn given_stored_transcript_when_fetching_then_record_matches() {
    let store = InMemoryTranscriptStore::new(SMALL_CAPACITY);
    let record = transcript("hello");
    let id = record.id;

    store.put(record).await.unwrap();

    let fetched = store.get(id).await.unwrap().unwrap();
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.text, "hello");
}

#[tokio::test]
async fn given_unknown_id_when_fetching_then_returns_none() {
    let store = InMemoryTranscriptStore::new(SMALL_CAPACITY);

    let fetched = store.get(TranscriptId::new()).await.unwrap();

    assert!(fetched.is_none());
}

#[tokio::test]
async fn given_full_store_when_storing_another_then_oldest_record_is_evicted() {
    let store = InMemoryTranscriptStore::new(SMALL_CAPACITY);
    let first = transcript("first");
    let first_id = first.id;
    let second = transcript("second");
    let second_id = second.id;
    let third = transcript("third");
    let third_id = third.id;

    store.put(first).await.unwrap();
    store.put(second).await.unwrap();
    store.put(third).await.unwrap();

    assert!(store.get(first_id).await.unwrap().is_none());
    assert!(store.get(second_id).await.unwrap().is_some());
    assert!(store.get(third_id).await.unwrap().is_some());
}

#[tokio::test]
async fn given_existing_id_when_storing_again_then_record_is_replaced_without_eviction() {
    let store = InMemoryTranscriptStore::new(SMALL_CAPACITY);
    let first = transcript("first");
    let first_id = first.id;
    let second = transcript("second");
    let second_id = second.id;

    store.put(first.clone()).await.unwrap();
    store.put(second).await.unwrap();

    let mut updated = first;
    updated.text = "first, revised".to_string();
    store.put(updated).await.unwrap();

    assert_eq!(
        store.get(first_id).await.unwrap().unwrap().text,
        "first, revised"
    );
    assert!(store.get(second_id).await.unwrap().is_some());
}
