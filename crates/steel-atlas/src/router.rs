use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogFilter, SteelComparison, SteelRecord};
use crate::error::AppError;
use crate::heat_treat::{TemperatureUnit, TemperingReading};
use crate::recommend::{Answers, ScoredResult};
use crate::service::SteelAtlasService;

/// Router builder exposing catalog, comparison, simulator and
/// recommendation endpoints.
pub fn catalog_router(service: Arc<SteelAtlasService>) -> Router {
    Router::new()
        .route("/api/v1/steels", get(list_handler))
        .route("/api/v1/steels/:steel_id", get(steel_handler))
        .route("/api/v1/steels/:steel_id/tempering", get(tempering_handler))
        .route("/api/v1/producers", get(producers_handler))
        .route("/api/v1/compare", post(compare_handler))
        .route("/api/v1/recommendations", post(recommend_handler))
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub struct SteelListResponse {
    pub count: usize,
    pub loaded_at: DateTime<Utc>,
    pub steels: Vec<SteelRecord>,
}

#[derive(Debug, Serialize)]
pub struct ProducersResponse {
    pub producers: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TemperingQuery {
    pub temperature: f64,
    #[serde(default)]
    pub unit: TemperatureUnit,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(flatten)]
    pub answers: Answers,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub answers: Answers,
    pub results: Vec<ScoredResult>,
}

pub(crate) async fn list_handler(
    State(service): State<Arc<SteelAtlasService>>,
    Query(filter): Query<CatalogFilter>,
) -> Json<SteelListResponse> {
    let steels: Vec<SteelRecord> = service.list(&filter).into_iter().cloned().collect();
    Json(SteelListResponse {
        count: steels.len(),
        loaded_at: service.catalog().loaded_at(),
        steels,
    })
}

pub(crate) async fn steel_handler(
    State(service): State<Arc<SteelAtlasService>>,
    Path(steel_id): Path<String>,
) -> Result<Json<SteelRecord>, AppError> {
    let steel = service.steel(&steel_id)?;
    Ok(Json(steel.clone()))
}

pub(crate) async fn tempering_handler(
    State(service): State<Arc<SteelAtlasService>>,
    Path(steel_id): Path<String>,
    Query(query): Query<TemperingQuery>,
) -> Result<Json<TemperingReading>, AppError> {
    let reading = service.tempering(&steel_id, query.temperature, query.unit)?;
    Ok(Json(reading))
}

pub(crate) async fn producers_handler(
    State(service): State<Arc<SteelAtlasService>>,
) -> Json<ProducersResponse> {
    let producers = service
        .producers()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(ProducersResponse { producers })
}

pub(crate) async fn compare_handler(
    State(service): State<Arc<SteelAtlasService>>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<SteelComparison>, AppError> {
    let comparison = service.compare(&request.ids)?;
    Ok(Json(comparison))
}

pub(crate) async fn recommend_handler(
    State(service): State<Arc<SteelAtlasService>>,
    Json(request): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    let results = service.recommend(&request.answers, request.limit);
    Json(RecommendationResponse {
        answers: request.answers,
        results,
    })
}
