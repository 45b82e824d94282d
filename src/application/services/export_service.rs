use crate::domain::{ExportFormat, Transcript, TranscriptSegment};

/// Assumed audio length when a transcript carries no duration and segments
/// must be synthesized from its text.
pub const DEFAULT_SYNTHESIS_DURATION_SECS: f64 = 60.0;

/// A transcript rendered for download.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedTranscript {
    pub body: String,
    pub content_type: &'static str,
    pub file_extension: &'static str,
}

/// Renders a transcript in the requested export encoding.
///
/// `Text` returns the transcript text byte-for-byte. The timed formats use
/// the transcript's own segments when present, in the order given; otherwise
/// segments are synthesized from its text with [`synthesize_segments`].
/// Infallible: empty input produces an empty (or header-only) body.
pub fn export_transcript(transcript: &Transcript, format: ExportFormat) -> ExportedTranscript {
    let body = match format {
        ExportFormat::Text => transcript.text.clone(),
        ExportFormat::Srt => format_srt(&effective_segments(transcript)),
        ExportFormat::Vtt => format_vtt(&effective_segments(transcript)),
        ExportFormat::Json => format_json(&effective_segments(transcript)),
    };

    ExportedTranscript {
        body,
        content_type: format.as_mime(),
        file_extension: format.file_extension(),
    }
}

/// Derives uniform-duration segments from unsegmented text.
///
/// The text is split on `'\n'`; lines that are blank after trimming produce
/// no segment, while surviving lines keep their original content. The `n`
/// resulting segments are contiguous and divide `duration_secs` evenly.
/// Text with no non-blank lines yields an empty vec.
pub fn synthesize_segments(text: &str, duration_secs: f64) -> Vec<TranscriptSegment> {
    let lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Vec::new();
    }

    let segment_duration = duration_secs / lines.len() as f64;

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| TranscriptSegment {
            id: i as u32 + 1,
            start: i as f64 * segment_duration,
            end: (i + 1) as f64 * segment_duration,
            text: (*line).to_string(),
        })
        .collect()
}

fn effective_segments(transcript: &Transcript) -> Vec<TranscriptSegment> {
    if transcript.segments.is_empty() {
        synthesize_segments(
            &transcript.text,
            transcript
                .duration
                .unwrap_or(DEFAULT_SYNTHESIS_DURATION_SECS),
        )
    } else {
        transcript.segments.clone()
    }
}

fn format_srt(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            // cue numbers are list positions, not segment ids
            format!(
                "{}\n{} --> {}\n{}\n",
                i + 1,
                format_timecode(segment.start, ','),
                format_timecode(segment.end, ','),
                segment.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_vtt(segments: &[TranscriptSegment]) -> String {
    let body = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            format!(
                "{}\n{} --> {}\n{}\n",
                i + 1,
                format_timecode(segment.start, '.'),
                format_timecode(segment.end, '.'),
                segment.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("WEBVTT\n\n{}", body)
}

fn format_json(segments: &[TranscriptSegment]) -> String {
    serde_json::to_string_pretty(segments).expect("segment serialization is infallible")
}

/// Renders seconds as `HH:MM:SS<sep>mmm`. Fractional milliseconds are
/// truncated, not rounded; hours are not capped at 24.
fn format_timecode(seconds: f64, separator: char) -> String {
    let total_ms = (seconds * 1000.0) as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;
    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        hours, minutes, secs, separator, millis
    )
}
