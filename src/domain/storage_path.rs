use std::fmt;

use super::transcript::TranscriptId;

/// Object key for a stored audio file: `<transcript uuid>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(transcript_id: &TranscriptId, extension: &str) -> Self {
        Self(format!("{}.{}", transcript_id.as_uuid(), extension))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
