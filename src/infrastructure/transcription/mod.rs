mod engine_factory;
mod mock_engine;
mod openai_whisper_engine;

pub use engine_factory::{TranscriptionEngineFactory, TranscriptionProvider};
pub use mock_engine::MockTranscriptionEngine;
pub use openai_whisper_engine::OpenAiWhisperEngine;
