mod audio_format;
mod export_format;
mod storage_path;
mod transcript;
mod transcript_segment;

pub use audio_format::AudioFormat;
pub use export_format::ExportFormat;
pub use storage_path::StoragePath;
pub use transcript::{Transcript, TranscriptId};
pub use transcript_segment::TranscriptSegment;
