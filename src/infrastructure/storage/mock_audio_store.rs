use bytes::Bytes;

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::StoragePath;

pub struct MockAudioStore;

#[async_trait::async_trait]
impl AudioStore for MockAudioStore {
    async fn store(&self, _path: &StoragePath, data: Bytes) -> Result<u64, AudioStoreError> {
        Ok(data.len() as u64)
    }

    async fn fetch(&self, _path: &StoragePath) -> Result<Vec<u8>, AudioStoreError> {
        Ok(vec![])
    }

    async fn delete(&self, _path: &StoragePath) -> Result<(), AudioStoreError> {
        Ok(())
    }
}
