use skriva::domain::{StoragePath, TranscriptId};

#[test]
fn given_id_and_extension_when_building_path_then_key_is_uuid_dot_extension() {
    let id = TranscriptId::new();
    let path = StoragePath::new(&id, "webm");

    assert_eq!(path.as_str(), format!("{}.webm", id.as_uuid()));
}

#[test]
fn given_raw_string_when_building_path_then_value_is_kept_verbatim() {
    let path = StoragePath::from_raw("uploads/recording.wav");

    assert_eq!(path.as_str(), "uploads/recording.wav");
    assert_eq!(path.to_string(), "uploads/recording.wav");
}
