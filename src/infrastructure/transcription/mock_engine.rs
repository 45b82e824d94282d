use async_trait::async_trait;
use rand::Rng;

use crate::application::ports::{RawTranscription, TranscriptionEngine, TranscriptionError};
use crate::domain::TranscriptSegment;

/// Canned transcription results standing in for a real speech-to-text engine.
///
/// Each call picks one of a fixed set of sample transcripts at random and
/// optionally sleeps to simulate processing time. The randomness stops at
/// this adapter: callers only ever see a fully-formed transcription.
pub struct MockTranscriptionEngine {
    simulated_delay_ms: u64,
}

impl MockTranscriptionEngine {
    pub fn new(simulated_delay_ms: u64) -> Self {
        Self { simulated_delay_ms }
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<RawTranscription, TranscriptionError> {
        if audio_data.is_empty() {
            return Err(TranscriptionError::UnsupportedFormat(
                "empty audio payload".to_string(),
            ));
        }

        if self.simulated_delay_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.simulated_delay_ms)).await;
        }

        let pick = rand::thread_rng().gen_range(0..3);
        let sample = sample_transcription(pick);

        tracing::debug!(
            sample = pick,
            chars = sample.text.len(),
            "Mock transcription selected"
        );

        Ok(sample)
    }
}

fn sample_transcription(pick: usize) -> RawTranscription {
    match pick {
        0 => RawTranscription {
            text: "This is a simulated transcription from Whisper.\nIn a real application, this \
                   would be the actual transcribed text from the audio recording or file."
                .to_string(),
            confidence: 0.95,
            language: Some("en".to_string()),
            duration: Some(7.2),
            segments: vec![
                TranscriptSegment::new(
                    1,
                    0.0,
                    2.5,
                    "This is a simulated transcription from Whisper.".to_string(),
                ),
                TranscriptSegment::new(
                    2,
                    2.6,
                    7.2,
                    "In a real application, this would be the actual transcribed text from the \
                     audio recording or file."
                        .to_string(),
                ),
            ],
        },
        1 => RawTranscription {
            text: "This is a simulated transcription from Google Speech-to-Text API.".to_string(),
            confidence: 0.92,
            language: Some("en-US".to_string()),
            duration: None,
            segments: Vec::new(),
        },
        _ => RawTranscription {
            text: "This is a simulated transcription from Microsoft Azure Speech Services."
                .to_string(),
            confidence: 0.89,
            language: Some("en-US".to_string()),
            duration: None,
            segments: Vec::new(),
        },
    }
}
