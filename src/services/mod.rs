// Service exports
pub mod breed_store;
pub mod cache;
pub mod firestore;

pub use breed_store::{BreedStore, DogStore, InMemoryStore, StoreError};
pub use cache::{CacheStats, CachedBreedStore};
pub use firestore::{FirestoreClient, FirestoreCollections};
