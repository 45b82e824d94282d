use std::collections::{HashMap, VecDeque};

use tokio::sync::RwLock;

use crate::application::ports::{TranscriptStore, TranscriptStoreError};
use crate::domain::{Transcript, TranscriptId};

/// Bounded in-memory transcript store.
///
/// Insertion order doubles as the eviction order: once `capacity` records are
/// held, storing a new id evicts the oldest one. Re-storing an existing id
/// replaces the record without consuming extra capacity.
pub struct InMemoryTranscriptStore {
    capacity: usize,
    inner: RwLock<CacheState>,
}

struct CacheState {
    records: HashMap<TranscriptId, Transcript>,
    insertion_order: VecDeque<TranscriptId>,
}

impl InMemoryTranscriptStore {
    /// `capacity` is clamped to at least one record.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: RwLock::new(CacheState {
                records: HashMap::new(),
                insertion_order: VecDeque::new(),
            }),
        }
    }
}

#[async_trait::async_trait]
impl TranscriptStore for InMemoryTranscriptStore {
    async fn put(&self, transcript: Transcript) -> Result<(), TranscriptStoreError> {
        let id = transcript.id;
        let mut state = self.inner.write().await;

        if state.records.insert(id, transcript).is_none() {
            state.insertion_order.push_back(id);
            if state.insertion_order.len() > self.capacity {
                if let Some(evicted) = state.insertion_order.pop_front() {
                    state.records.remove(&evicted);
                    tracing::debug!(
                        transcript_id = %evicted.as_uuid(),
                        "Evicted oldest transcript from cache"
                    );
                }
            }
        }

        Ok(())
    }

    async fn get(&self, id: TranscriptId) -> Result<Option<Transcript>, TranscriptStoreError> {
        let state = self.inner.read().await;
        Ok(state.records.get(&id).cloned())
    }
}
