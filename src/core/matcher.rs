use crate::core::{
    filters::eligible_candidates,
    resolver::BreedInfoResolver,
    scoring::score_pair,
};
use crate::models::{CompatibilityResult, Dog, ScoringWeights};
use crate::services::BreedStore;
use std::fmt;
use std::sync::Arc;

/// Breed lookups allowed in flight at once during a single call
pub const DEFAULT_LOOKUP_CONCURRENCY: usize = 8;

/// Main matching orchestrator - scores pairs and ranks candidate pools
///
/// # Pipeline Stages
/// 1. Eligibility filtering (identity, owner, gender)
/// 2. Breed lookup, each distinct breed once per call
/// 3. Five-dimension scoring and aggregation
/// 4. Stable sort by score and truncation
///
/// The matcher holds no per-call state, so one instance can serve
/// concurrent requests.
#[derive(Clone)]
pub struct BreedMatcher {
    store: Arc<dyn BreedStore>,
    weights: ScoringWeights,
    lookup_concurrency: usize,
}

impl BreedMatcher {
    pub fn new(store: Arc<dyn BreedStore>) -> Self {
        Self::with_weights(store, ScoringWeights::default())
    }

    /// Build a matcher with custom weights
    ///
    /// # Panics
    /// Panics when the weights do not sum to 1.0 or any weight is outside
    /// [0, 1]. That is a deployment bug, not bad data.
    pub fn with_weights(store: Arc<dyn BreedStore>, weights: ScoringWeights) -> Self {
        if let Err(e) = weights.validate() {
            panic!("Invalid scoring weights: {}", e);
        }

        Self {
            store,
            weights,
            lookup_concurrency: DEFAULT_LOOKUP_CONCURRENCY,
        }
    }

    pub fn with_lookup_concurrency(mut self, lookup_concurrency: usize) -> Self {
        self.lookup_concurrency = lookup_concurrency.max(1);
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score `dog_b` as a breeding partner for `dog_a`
    pub async fn calculate_compatibility(&self, dog_a: &Dog, dog_b: &Dog) -> CompatibilityResult {
        let mut resolver = BreedInfoResolver::new(self.store.as_ref());
        resolver
            .prefetch([dog_a.breed.as_str(), dog_b.breed.as_str()], self.lookup_concurrency)
            .await;

        let breed_a = resolver.cached(&dog_a.breed);
        let breed_b = resolver.cached(&dog_b.breed);

        score_pair(dog_a, breed_a.as_deref(), dog_b, breed_b.as_deref(), &self.weights)
    }

    /// Rank candidates against a target dog
    ///
    /// # Arguments
    /// * `target` - The dog looking for a partner
    /// * `candidates` - Potential partners; ineligible ones are skipped
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// At most `limit` results, highest score first. Equal scores keep
    /// their input order.
    pub async fn find_best_matches(
        &self,
        target: &Dog,
        candidates: &[Dog],
        limit: usize,
    ) -> Vec<CompatibilityResult> {
        let eligible: Vec<&Dog> = eligible_candidates(target, candidates).collect();

        tracing::debug!(
            "{} of {} candidates eligible for dog {}",
            eligible.len(),
            candidates.len(),
            target.id
        );

        if eligible.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut resolver = BreedInfoResolver::new(self.store.as_ref());
        let breed_names = std::iter::once(target.breed.as_str())
            .chain(eligible.iter().map(|dog| dog.breed.as_str()));
        resolver.prefetch(breed_names, self.lookup_concurrency).await;

        let target_breed = resolver.cached(&target.breed);

        let mut matches: Vec<CompatibilityResult> = eligible
            .into_iter()
            .map(|candidate| {
                let candidate_breed = resolver.cached(&candidate.breed);
                score_pair(
                    target,
                    target_breed.as_deref(),
                    candidate,
                    candidate_breed.as_deref(),
                    &self.weights,
                )
            })
            .collect();

        // Stable: ties keep input order
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(limit);

        tracing::debug!(
            "Ranked {} matches for dog {} ({} distinct breeds)",
            matches.len(),
            target.id,
            resolver.len()
        );

        matches
    }
}

impl fmt::Debug for BreedMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreedMatcher")
            .field("weights", &self.weights)
            .field("lookup_concurrency", &self.lookup_concurrency)
            .finish_non_exhaustive()
    }
}
