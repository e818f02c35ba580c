use crate::core::breed_key;
use crate::models::BreedInfo;
use crate::services::BreedStore;
use futures::stream::{self, StreamExt};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Look up a breed by name, treating store failures as "not found"
pub async fn resolve_breed(store: &dyn BreedStore, breed_name: &str) -> Option<BreedInfo> {
    lookup_key(store, &breed_key(breed_name))
        .await
        .map(|info| info.as_ref().clone())
}

async fn lookup_key(store: &dyn BreedStore, key: &str) -> Option<Arc<BreedInfo>> {
    match store.lookup(key).await {
        Ok(Some(info)) => Some(Arc::new(info)),
        Ok(None) => {
            tracing::debug!("No breed info for key: {}", key);
            None
        }
        Err(e) => {
            tracing::error!("Error fetching breed info for {}: {}", key, e);
            None
        }
    }
}

/// Breed resolver with a memo scoped to one scoring or ranking call
///
/// Every canonical key is fetched at most once per resolver. Absent breeds
/// are memoized too, so a missing breed shared by many candidates costs a
/// single lookup.
pub struct BreedInfoResolver<'a> {
    store: &'a dyn BreedStore,
    cache: HashMap<String, Option<Arc<BreedInfo>>>,
}

impl<'a> BreedInfoResolver<'a> {
    pub fn new(store: &'a dyn BreedStore) -> Self {
        Self {
            store,
            cache: HashMap::new(),
        }
    }

    /// Resolve one breed, fetching it on first use
    pub async fn resolve(&mut self, breed_name: &str) -> Option<Arc<BreedInfo>> {
        let key = breed_key(breed_name);
        if let Some(cached) = self.cache.get(&key) {
            return cached.clone();
        }

        let info = lookup_key(self.store, &key).await;
        self.cache.insert(key, info.clone());
        info
    }

    /// Fetch every breed not yet memoized, at most `concurrency` at a time
    pub async fn prefetch<'n, I>(&mut self, breed_names: I, concurrency: usize)
    where
        I: IntoIterator<Item = &'n str>,
    {
        let mut seen = HashSet::new();
        let keys: Vec<String> = breed_names
            .into_iter()
            .map(breed_key)
            .filter(|key| !self.cache.contains_key(key) && seen.insert(key.clone()))
            .collect();

        if keys.is_empty() {
            return;
        }

        tracing::debug!("Fetching {} distinct breeds", keys.len());

        let store = self.store;
        let fetched: Vec<(String, Option<Arc<BreedInfo>>)> = stream::iter(keys)
            .map(|key| async move {
                let info = lookup_key(store, &key).await;
                (key, info)
            })
            .buffer_unordered(concurrency.max(1))
            .collect()
            .await;

        self.cache.extend(fetched);
    }

    /// Memoized record for a breed, without touching the store
    pub fn cached(&self, breed_name: &str) -> Option<Arc<BreedInfo>> {
        self.cache.get(&breed_key(breed_name)).cloned().flatten()
    }

    /// Number of distinct keys memoized so far
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
