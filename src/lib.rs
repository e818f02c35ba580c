//! Breed Match - breed compatibility scoring for a dog-breeding marketplace
//!
//! This library scores a pair of dogs on five breed-level heuristics (health,
//! size, breed group, genetic diversity and cost) and ranks candidate dogs
//! against a target dog by that score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{breed_key, breed_route, BreedMatcher, CompatibilityBadge};
pub use models::{BreedInfo, CompatibilityResult, Dog, ScoringWeights};
pub use services::{BreedStore, DogStore, StoreError};
