use skriva::domain::{StoragePath, Transcript, TranscriptId, TranscriptSegment};

#[test]
fn given_two_transcript_ids_when_generated_then_are_unique() {
    let id1 = TranscriptId::new();
    let id2 = TranscriptId::new();
    assert_ne!(id1, id2);
}

#[test]
fn given_uuid_when_round_tripping_transcript_id_then_value_is_preserved() {
    let uuid = uuid::Uuid::new_v4();
    let id = TranscriptId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}

#[test]
fn given_valid_params_when_creating_transcript_then_optional_fields_start_empty() {
    let id = TranscriptId::new();
    let transcript = Transcript::new(
        id,
        "hello".to_string(),
        StoragePath::new(&id, "webm"),
        "audio/webm".to_string(),
        0.95,
    );

    assert_eq!(transcript.id, id);
    assert_eq!(transcript.text, "hello");
    assert!(transcript.segments.is_empty());
    assert!(transcript.duration.is_none());
    assert!(transcript.language.is_none());
    assert_eq!(transcript.confidence, 0.95);
}

#[test]
fn given_segment_params_when_creating_segment_then_fields_are_assigned() {
    let segment = TranscriptSegment::new(3, 1.5, 4.25, "spoken words".to_string());

    assert_eq!(segment.id, 3);
    assert_eq!(segment.start, 1.5);
    assert_eq!(segment.end, 4.25);
    assert_eq!(segment.text, "spoken words");
}
