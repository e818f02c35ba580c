use crate::core::breed_key;
use crate::models::BreedInfo;
use crate::services::breed_store::{BreedStore, StoreError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Breed store decorator with a process-wide TTL cache
///
/// Breed records change far less often than dogs are ranked, so found
/// records are kept in a bounded in-memory cache shared by all requests.
/// Misses and errors are never cached.
pub struct CachedBreedStore {
    inner: Arc<dyn BreedStore>,
    cache: moka::future::Cache<String, BreedInfo>,
    ttl_secs: u64,
}

impl CachedBreedStore {
    pub fn new(inner: Arc<dyn BreedStore>, max_entries: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            inner,
            cache,
            ttl_secs,
        }
    }

    /// Drop the cached record for a breed so the next lookup refetches it
    pub async fn invalidate(&self, breed_name: &str) {
        let key = breed_key(breed_name);
        self.cache.invalidate(&key).await;
        tracing::debug!("Invalidated cached breed: {}", key);
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        self.cache.run_pending_tasks().await;
        CacheStats {
            entries: self.cache.entry_count(),
            ttl_secs: self.ttl_secs,
        }
    }
}

#[async_trait]
impl BreedStore for CachedBreedStore {
    async fn lookup(&self, breed_key: &str) -> Result<Option<BreedInfo>, StoreError> {
        if let Some(info) = self.cache.get(breed_key).await {
            tracing::trace!("Breed cache hit: {}", breed_key);
            return Ok(Some(info));
        }

        let found = self.inner.lookup(breed_key).await?;

        if let Some(info) = &found {
            self.cache.insert(breed_key.to_string(), info.clone()).await;
            tracing::trace!("Breed cache set: {}", breed_key);
        }

        Ok(found)
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
    pub ttl_secs: u64,
}
