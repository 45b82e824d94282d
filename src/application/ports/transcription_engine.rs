use async_trait::async_trait;

use crate::domain::TranscriptSegment;

/// Raw output of a speech-to-text backend, before a transcript record is
/// assembled around it.
#[derive(Debug, Clone)]
pub struct RawTranscription {
    pub text: String,
    pub confidence: f32,
    pub language: Option<String>,
    pub duration: Option<f64>,
    pub segments: Vec<TranscriptSegment>,
}

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<RawTranscription, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("engine unavailable: {0}")]
    EngineUnavailable(String),
}
