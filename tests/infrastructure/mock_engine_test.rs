use skriva::application::ports::{TranscriptionEngine, TranscriptionError};
use skriva::infrastructure::transcription::MockTranscriptionEngine;

#[tokio::test]
async fn given_audio_payload_when_transcribing_then_sample_is_well_formed() {
    let engine = MockTranscriptionEngine::new(0);

    let result = engine.transcribe(b"fake audio").await.unwrap();

    assert!(!result.text.is_empty());
    assert!(result.confidence > 0.0 && result.confidence <= 1.0);
    for segment in &result.segments {
        assert!(segment.end >= segment.start);
        assert!(!segment.text.is_empty());
    }
    for pair in result.segments.windows(2) {
        assert!(pair[1].id > pair[0].id);
    }
}

#[tokio::test]
async fn given_empty_payload_when_transcribing_then_returns_unsupported_format() {
    let engine = MockTranscriptionEngine::new(0);

    let result = engine.transcribe(b"").await;

    assert!(matches!(
        result,
        Err(TranscriptionError::UnsupportedFormat(_))
    ));
}

#[tokio::test]
async fn given_repeated_calls_when_transcribing_then_every_sample_is_valid() {
    let engine = MockTranscriptionEngine::new(0);

    for _ in 0..20 {
        let result = engine.transcribe(b"fake audio").await.unwrap();
        assert!(!result.text.is_empty());
    }
}
