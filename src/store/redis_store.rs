use crate::error::{Result, SuggestError};
use crate::store::IndexStore;
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

/// Redis-backed index store. Keys are facet types, values are snapshot bytes.
#[derive(Clone)]
pub struct RedisIndexStore {
    connection: ConnectionManager,
}

impl RedisIndexStore {
    /// Connect to Redis and verify the connection with PING
    pub async fn new(redis_url: &str) -> Result<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| SuggestError::Store(format!("Failed to create Redis client: {}", e)))?;

        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| SuggestError::Store(format!("Failed to connect to Redis: {}", e)))?;

        // Test connection
        let mut test_conn = connection.clone();
        redis::cmd("PING")
            .query_async::<_, String>(&mut test_conn)
            .await
            .map_err(|e| SuggestError::Store(format!("Redis connection test failed: {}", e)))?;

        tracing::info!("Initialized Redis index store");

        Ok(Self { connection })
    }
}

#[async_trait]
impl IndexStore for RedisIndexStore {
    async fn get_index(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut connection = self.connection.clone();
        let payload: Option<Vec<u8>> = connection.get(key).await?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_is_a_store_error() {
        let err = RedisIndexStore::new("not-a-redis-url").await.err().unwrap();
        assert!(matches!(err, SuggestError::Store(_)));
    }

    #[tokio::test]
    #[ignore] // Requires a running Redis server at REDIS_URL
    async fn test_get_index_against_redis() {
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".into());
        let store = RedisIndexStore::new(&url).await.unwrap();

        let mut connection = store.connection.clone();
        let _: () = connection
            .set("autocomplete-suggest:test:instrument", b"payload".to_vec())
            .await
            .unwrap();

        let payload = store
            .get_index("autocomplete-suggest:test:instrument")
            .await
            .unwrap();
        assert_eq!(payload, Some(b"payload".to_vec()));

        let missing = store
            .get_index("autocomplete-suggest:test:missing")
            .await
            .unwrap();
        assert!(missing.is_none());

        let _: () = connection
            .del("autocomplete-suggest:test:instrument")
            .await
            .unwrap();
    }
}
