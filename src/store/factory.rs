use crate::config::{StoreBackend, StoreConfig};
use crate::error::Result;
use crate::store::{InMemoryIndexStore, IndexStore, RedisIndexStore};
use std::sync::Arc;

/// Create an index store based on configuration
pub async fn create_store(config: &StoreConfig) -> Result<Arc<dyn IndexStore>> {
    match config.backend {
        StoreBackend::Redis => {
            tracing::info!("Initializing Redis index store");
            let store = RedisIndexStore::new(&config.redis_url).await?;
            Ok(Arc::new(store))
        }

        StoreBackend::Memory => Ok(create_in_memory_store()),
    }
}

/// Create an empty in-memory store (for testing and development)
pub fn create_in_memory_store() -> Arc<dyn IndexStore> {
    tracing::info!("Initializing in-memory index store");
    Arc::new(InMemoryIndexStore::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_memory_store() {
        let config = StoreConfig {
            backend: StoreBackend::Memory,
            ..Default::default()
        };

        let store = create_store(&config).await.unwrap();
        assert!(store.get_index("platform").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_redis_store_with_bad_url_fails() {
        let config = StoreConfig {
            backend: StoreBackend::Redis,
            redis_url: "not-a-redis-url".to_string(),
        };

        assert!(create_store(&config).await.is_err());
    }
}
