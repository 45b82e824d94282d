use std::io;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::StoragePath;

#[async_trait]
pub trait AudioStore: Send + Sync {
    /// Stores an audio payload under the given key, returning the byte count.
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<u64, AudioStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, AudioStoreError>;

    async fn delete(&self, path: &StoragePath) -> Result<(), AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
