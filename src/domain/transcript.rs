use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::storage_path::StoragePath;
use super::transcript_segment::TranscriptSegment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TranscriptId(Uuid);

impl TranscriptId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TranscriptId {
    fn default() -> Self {
        Self::new()
    }
}

/// A transcription result: full text plus optional timing data.
///
/// An empty `segments` vec means the backend returned no timing data; export
/// formats that need segments synthesize them from `text` instead.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub id: TranscriptId,
    pub text: String,
    pub segments: Vec<TranscriptSegment>,
    pub duration: Option<f64>,
    pub language: Option<String>,
    pub confidence: f32,
    pub audio_path: StoragePath,
    pub audio_content_type: String,
    pub created_at: DateTime<Utc>,
}

impl Transcript {
    pub fn new(
        id: TranscriptId,
        text: String,
        audio_path: StoragePath,
        audio_content_type: String,
        confidence: f32,
    ) -> Self {
        Self {
            id,
            text,
            segments: Vec::new(),
            duration: None,
            language: None,
            confidence,
            audio_path,
            audio_content_type,
            created_at: Utc::now(),
        }
    }
}
