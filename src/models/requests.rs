use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank candidate dogs against one of the caller's dogs
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "dog_id", rename = "dogId")]
    pub dog_id: String,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to score a single pair of dogs
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompatibilityRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "dog_id", rename = "dogId")]
    pub dog_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "other_dog_id", rename = "otherDogId")]
    pub other_dog_id: String,
}

/// Query for the breed route helper
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BreedRouteQuery {
    #[validate(length(min = 1))]
    pub name: String,
}
