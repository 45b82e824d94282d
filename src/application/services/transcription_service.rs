use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    AudioStore, AudioStoreError, TranscriptStore, TranscriptStoreError, TranscriptionEngine,
    TranscriptionError,
};
use crate::domain::{StoragePath, Transcript, TranscriptId};

/// Runs an upload through the pipeline: persist the audio, hand it to the
/// transcription engine, store and return the assembled transcript.
pub struct TranscriptionService<E: ?Sized>
where
    E: TranscriptionEngine,
{
    engine: Arc<E>,
    audio_store: Arc<dyn AudioStore>,
    transcript_store: Arc<dyn TranscriptStore>,
}

impl<E: ?Sized> TranscriptionService<E>
where
    E: TranscriptionEngine,
{
    pub fn new(
        engine: Arc<E>,
        audio_store: Arc<dyn AudioStore>,
        transcript_store: Arc<dyn TranscriptStore>,
    ) -> Self {
        Self {
            engine,
            audio_store,
            transcript_store,
        }
    }

    pub async fn transcribe(
        &self,
        data: Bytes,
        content_type: String,
        file_extension: &str,
    ) -> Result<Transcript, TranscribeError> {
        let id = TranscriptId::new();
        let audio_path = StoragePath::new(&id, file_extension);

        let stored_bytes = self.audio_store.store(&audio_path, data.clone()).await?;
        tracing::debug!(bytes = stored_bytes, path = %audio_path, "Audio stored");

        let raw = self.engine.transcribe(&data).await?;

        let mut transcript = Transcript::new(id, raw.text, audio_path, content_type, raw.confidence);
        transcript.language = raw.language;
        transcript.duration = raw.duration;
        transcript.segments = raw.segments;

        self.transcript_store.put(transcript.clone()).await?;

        tracing::info!(
            transcript_id = %id.as_uuid(),
            segments = transcript.segments.len(),
            "Transcription completed"
        );

        Ok(transcript)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("transcription: {0}")]
    Engine(#[from] TranscriptionError),
    #[error("audio storage: {0}")]
    AudioStorage(#[from] AudioStoreError),
    #[error("transcript storage: {0}")]
    TranscriptStorage(#[from] TranscriptStoreError),
}
