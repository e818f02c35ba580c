use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{breed_key, breed_route, BreedMatcher};
use crate::models::{
    BreedRouteQuery, BreedRouteResponse, CompatibilityRequest, Dog, ErrorResponse,
    FindMatchesRequest, FindMatchesResponse, HealthResponse, ScoredMatch,
};
use crate::services::DogStore;
use std::sync::Arc;
use std::time::Duration;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub dogs: Arc<dyn DogStore>,
    pub matcher: BreedMatcher,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/compatibility", web::post().to(compatibility))
        .route("/breeds/route", web::get().to(get_breed_route));
}

fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code: status.as_u16(),
    })
}

/// Fetch a dog or produce the response to send instead
async fn fetch_dog(dogs: &dyn DogStore, dog_id: &str) -> Result<Dog, HttpResponse> {
    match dogs.get_dog(dog_id).await {
        Ok(Some(dog)) => Ok(dog),
        Ok(None) => Err(error_response(
            StatusCode::NOT_FOUND,
            "Dog not found",
            format!("No dog with id {}", dog_id),
        )),
        Err(e) => {
            tracing::error!("Failed to fetch dog {}: {}", dog_id, e);
            Err(error_response(StatusCode::BAD_GATEWAY, "Failed to fetch dog", e.to_string()))
        }
    }
}

fn timeout_response(timeout_ms: u64) -> HttpResponse {
    error_response(
        StatusCode::GATEWAY_TIMEOUT,
        "Matching timed out",
        format!("Matching did not finish within {}ms", timeout_ms),
    )
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "dogId": "string",
///   "limit": 10
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let settings = &state.matching;
    let limit = req
        .limit
        .unwrap_or(settings.default_limit)
        .min(settings.max_limit) as usize;

    tracing::info!("Finding matches for dog: {}, limit: {}", req.dog_id, limit);

    let target = match fetch_dog(state.dogs.as_ref(), &req.dog_id).await {
        Ok(dog) => dog,
        Err(response) => return response,
    };

    let candidates = match state.dogs.list_dogs(settings.max_candidates).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to list candidates for {}: {}", req.dog_id, e);
            return error_response(
                StatusCode::BAD_GATEWAY,
                "Failed to list candidates",
                e.to_string(),
            );
        }
    };

    tracing::debug!("Loaded {} candidates for {}", candidates.len(), req.dog_id);

    // Dropping the ranking future on timeout cancels in-flight breed lookups
    let ranking = state.matcher.find_best_matches(&target, &candidates, limit);
    let matches = match tokio::time::timeout(Duration::from_millis(settings.timeout_ms), ranking).await {
        Ok(matches) => matches,
        Err(_) => {
            tracing::warn!("Ranking for {} timed out after {}ms", req.dog_id, settings.timeout_ms);
            return timeout_response(settings.timeout_ms);
        }
    };

    let response = FindMatchesResponse {
        matches: matches.into_iter().map(ScoredMatch::from).collect(),
        total_candidates: candidates.len(),
    };

    tracing::info!(
        "Returning {} matches for dog {} (from {} candidates)",
        response.matches.len(),
        req.dog_id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Pairwise compatibility endpoint
///
/// POST /api/v1/compatibility
///
/// Request body:
/// ```json
/// {
///   "dogId": "string",
///   "otherDogId": "string"
/// }
/// ```
async fn compatibility(
    state: web::Data<AppState>,
    req: web::Json<CompatibilityRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let dog = match fetch_dog(state.dogs.as_ref(), &req.dog_id).await {
        Ok(dog) => dog,
        Err(response) => return response,
    };
    let other = match fetch_dog(state.dogs.as_ref(), &req.other_dog_id).await {
        Ok(dog) => dog,
        Err(response) => return response,
    };

    let timeout_ms = state.matching.timeout_ms;
    let scoring = state.matcher.calculate_compatibility(&dog, &other);
    match tokio::time::timeout(Duration::from_millis(timeout_ms), scoring).await {
        Ok(result) => {
            tracing::debug!("Compatibility {} x {}: {}", dog.id, other.id, result.score);
            HttpResponse::Ok().json(ScoredMatch::from(result))
        }
        Err(_) => timeout_response(timeout_ms),
    }
}

/// Breed route helper
///
/// GET /api/v1/breeds/route?name={breedName}
///
/// Gives UI collaborators the same breed key the matcher uses for lookups.
async fn get_breed_route(query: web::Query<BreedRouteQuery>) -> impl Responder {
    if let Err(errors) = query.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    HttpResponse::Ok().json(BreedRouteResponse {
        key: breed_key(&query.name),
        route: breed_route(&query.name),
    })
}
