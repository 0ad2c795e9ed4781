use crate::error::Result;
use crate::store::IndexStore;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory index store (for local runs and testing)
#[derive(Clone, Default)]
pub struct InMemoryIndexStore {
    entries: Arc<DashMap<String, Vec<u8>>>,
}

impl InMemoryIndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `payload` under `key`, replacing any previous value
    pub fn insert(&self, key: impl Into<String>, payload: Vec<u8>) {
        let key = key.into();
        tracing::debug!(key = %key, bytes = payload.len(), "Index payload stored");
        self.entries.insert(key, payload);
    }

    pub fn remove(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.remove(key).map(|(_, payload)| payload)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl IndexStore for InMemoryIndexStore {
    async fn get_index(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }
}
