use super::engine::Recommender;
use super::types::{HealthResponse, ProjectSummary, Query, RecommendRequest};
use crate::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::{Map, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const ENDPOINT_RECOMMEND: &str = "/recommend";
pub const ENDPOINT_HEALTH: &str = "/health";

/// Builds the HTTP application around a shared, read-only recommender.
pub fn router(recommender: Arc<Recommender>) -> Router {
    Router::new()
        .route(ENDPOINT_RECOMMEND, post(handle_recommend))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(recommender))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Cross-origin requests are allowed from anywhere.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub async fn handle_recommend(
    Extension(recommender): Extension<Arc<Recommender>>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Vec<ProjectSummary>>, ApiError> {
    // Only a JSON object is a query; arrays would otherwise bind positionally.
    let Json(body) = payload?;
    let req: RecommendRequest = serde_json::from_value(Value::Object(body))?;
    let query = Query::from(req);

    let results = recommender.recommend_projects(&query);
    Ok(Json(results))
}

pub async fn handle_health(
    Extension(recommender): Extension<Arc<Recommender>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        projects: recommender.catalog_size(),
        vocabulary: recommender.vocabulary_size(),
    })
}
