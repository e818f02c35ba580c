use crate::core::breed_key;
use crate::models::{BreedInfo, Dog};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// Errors that can occur when reading from a dog or breed store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to breed characteristics, keyed by canonical breed key
#[async_trait]
pub trait BreedStore: Send + Sync {
    /// Fetch the record stored under `breed_key`, `Ok(None)` when there is none
    async fn lookup(&self, breed_key: &str) -> Result<Option<BreedInfo>, StoreError>;
}

/// Read access to dog listings
#[async_trait]
pub trait DogStore: Send + Sync {
    async fn get_dog(&self, dog_id: &str) -> Result<Option<Dog>, StoreError>;

    /// Up to `limit` dogs in store order
    async fn list_dogs(&self, limit: usize) -> Result<Vec<Dog>, StoreError>;
}

/// Fixed in-memory store for tests, benchmarks and local runs
#[derive(Debug, Default)]
pub struct InMemoryStore {
    breeds: HashMap<String, BreedInfo>,
    dogs: Vec<Dog>,
    unavailable: HashSet<String>,
    lookups: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a breed under the canonical key of its name
    pub fn with_breed(mut self, info: BreedInfo) -> Self {
        self.breeds.insert(breed_key(&info.name), info);
        self
    }

    pub fn with_dog(mut self, dog: Dog) -> Self {
        self.dogs.push(dog);
        self
    }

    pub fn with_dogs(mut self, dogs: impl IntoIterator<Item = Dog>) -> Self {
        self.dogs.extend(dogs);
        self
    }

    /// Make lookups for this breed fail as if the backend were down
    pub fn with_unavailable_breed(mut self, breed_name: &str) -> Self {
        self.unavailable.insert(breed_key(breed_name));
        self
    }

    /// Number of breed lookups served so far
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl BreedStore for InMemoryStore {
    async fn lookup(&self, breed_key: &str) -> Result<Option<BreedInfo>, StoreError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);

        if self.unavailable.contains(breed_key) {
            return Err(StoreError::Unavailable(format!("breed {}", breed_key)));
        }

        Ok(self.breeds.get(breed_key).cloned())
    }
}

#[async_trait]
impl DogStore for InMemoryStore {
    async fn get_dog(&self, dog_id: &str) -> Result<Option<Dog>, StoreError> {
        Ok(self.dogs.iter().find(|dog| dog.id == dog_id).cloned())
    }

    async fn list_dogs(&self, limit: usize) -> Result<Vec<Dog>, StoreError> {
        Ok(self.dogs.iter().take(limit).cloned().collect())
    }
}
