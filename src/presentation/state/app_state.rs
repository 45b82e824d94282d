use std::sync::Arc;

use crate::application::ports::{AudioStore, TranscriptStore, TranscriptionEngine};
use crate::application::services::TranscriptionService;
use crate::presentation::config::Settings;

pub struct AppState<E: ?Sized>
where
    E: TranscriptionEngine,
{
    pub transcription_service: Arc<TranscriptionService<E>>,
    pub transcript_store: Arc<dyn TranscriptStore>,
    pub audio_store: Arc<dyn AudioStore>,
    pub settings: Settings,
}

impl<E: ?Sized> Clone for AppState<E>
where
    E: TranscriptionEngine,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            transcript_store: Arc::clone(&self.transcript_store),
            audio_store: Arc::clone(&self.audio_store),
            settings: self.settings.clone(),
        }
    }
}
