//! Read access to serialized suggestion indexes

pub mod factory;
pub mod memory;
pub mod redis_store;

pub use factory::{create_in_memory_store, create_store};
pub use memory::InMemoryIndexStore;
pub use redis_store::RedisIndexStore;

use crate::error::Result;
use async_trait::async_trait;

/// Key-value store holding one serialized index per facet type
#[async_trait]
pub trait IndexStore: Send + Sync {
    /// Fetch the payload stored under `key`, `None` when the key is absent
    async fn get_index(&self, key: &str) -> Result<Option<Vec<u8>>>;
}
