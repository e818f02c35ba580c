// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BreedGroup, BreedInfo, CompatibilityResult, Dimension, DimensionScore, Dog, Gender,
    MedicalInfo, Reason, ReasonKind, ScoringWeights, UnknownBreedGroup, UnknownGender,
    WeightsError,
};
pub use requests::{BreedRouteQuery, CompatibilityRequest, FindMatchesRequest};
pub use responses::{BreedRouteResponse, ErrorResponse, FindMatchesResponse, HealthResponse, ScoredMatch};
