// Core algorithm exports
pub mod badge;
pub mod breed_key;
pub mod filters;
pub mod matcher;
pub mod resolver;
pub mod scoring;
pub mod size;

pub use badge::CompatibilityBadge;
pub use breed_key::{breed_key, breed_route};
pub use filters::{eligible_candidates, is_eligible_candidate};
pub use matcher::{BreedMatcher, DEFAULT_LOOKUP_CONCURRENCY};
pub use resolver::{resolve_breed, BreedInfoResolver};
pub use scoring::{aggregate, score_pair, Aggregate};
pub use size::{parse_average_weight, SizeBucket};
