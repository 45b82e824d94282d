mod audio;
mod export;
mod health;
mod transcribe;
mod transcript_response;
mod transcription;

pub use audio::{delete_audio_handler, get_audio_handler};
pub use export::export_transcription_handler;
pub use health::health_handler;
pub use transcribe::transcribe_handler;
pub use transcript_response::TranscriptionResponse;
pub use transcription::{get_transcription_handler, update_transcription_handler};
