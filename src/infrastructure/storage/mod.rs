mod local_audio_store;
mod memory_transcript_store;
mod mock_audio_store;

pub use local_audio_store::LocalAudioStore;
pub use memory_transcript_store::InMemoryTranscriptStore;
pub use mock_audio_store::MockAudioStore;
