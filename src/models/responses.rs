use serde::{Deserialize, Serialize};
use crate::core::CompatibilityBadge;
use crate::models::domain::CompatibilityResult;

/// A scored candidate together with its presentation badge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    #[serde(flatten)]
    pub result: CompatibilityResult,
    pub badge: CompatibilityBadge,
}

impl From<CompatibilityResult> for ScoredMatch {
    fn from(result: CompatibilityResult) -> Self {
        let badge = CompatibilityBadge::from_score(result.score);
        Self { result, badge }
    }
}

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<ScoredMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Breed route helper response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedRouteResponse {
    pub key: String,
    pub route: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
