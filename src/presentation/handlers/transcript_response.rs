use serde::Serialize;

use crate::domain::{Transcript, TranscriptSegment};

/// Wire representation of a transcript, shared by the transcription handlers.
#[derive(Debug, Serialize)]
pub struct TranscriptionResponse {
    pub id: String,
    pub text: String,
    pub audio_url: String,
    pub confidence: f32,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<TranscriptSegment>,
}

impl From<&Transcript> for TranscriptionResponse {
    fn from(transcript: &Transcript) -> Self {
        Self {
            id: transcript.id.as_uuid().to_string(),
            text: transcript.text.clone(),
            audio_url: format!("/api/v1/audio/{}", transcript.id.as_uuid()),
            confidence: transcript.confidence,
            created_at: transcript.created_at.to_rfc3339(),
            language: transcript.language.clone(),
            duration: transcript.duration,
            segments: transcript.segments.clone(),
        }
    }
}
