mod export_service;
mod transcription_service;

pub use export_service::{
    DEFAULT_SYNTHESIS_DURATION_SECS, ExportedTranscript, export_transcript, synthesize_segments,
};
pub use transcription_service::{TranscribeError, TranscriptionService};
