use async_trait::async_trait;

use crate::domain::{Transcript, TranscriptId};

#[async_trait]
pub trait TranscriptStore: Send + Sync {
    async fn put(&self, transcript: Transcript) -> Result<(), TranscriptStoreError>;

    async fn get(&self, id: TranscriptId) -> Result<Option<Transcript>, TranscriptStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
}
