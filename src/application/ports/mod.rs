mod audio_store;
mod transcript_store;
mod transcription_engine;

pub use audio_store::{AudioStore, AudioStoreError};
pub use transcript_store::{TranscriptStore, TranscriptStoreError};
pub use transcription_engine::{RawTranscription, TranscriptionEngine, TranscriptionError};
