use serde::{Deserialize, Serialize};

/// A timed span of transcript text, offsets in seconds from transcript start.
///
/// `id` is unique within a transcript and ascending, but not necessarily
/// contiguous. `end >= start` always holds for segments produced by this
/// crate; segment text is carried verbatim, whitespace included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub id: u32,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl TranscriptSegment {
    pub fn new(id: u32, start: f64, end: f64, text: String) -> Self {
        Self {
            id,
            start,
            end,
            text,
        }
    }
}
