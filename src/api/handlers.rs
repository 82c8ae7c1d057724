use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::batch_id::BatchId;
use crate::models::{ActionOutcome, ActionRecord};
use crate::services;

use super::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogStatsResponse {
    pub movies: usize,
    pub serials: usize,
    pub actors: usize,
    pub users: usize,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Run a batch of actions against the shared catalog, in order
pub async fn process_actions(
    State(state): State<AppState>,
    Extension(batch_id): Extension<BatchId>,
    Json(records): Json<Vec<ActionRecord>>,
) -> AppResult<Json<Vec<ActionOutcome>>> {
    if records.is_empty() {
        return Err(AppError::InvalidInput(
            "Must provide at least one action".to_string(),
        ));
    }

    let mut catalog = state.inner.write().await;
    let outcomes = services::process_batch(&mut catalog, batch_id, &records);

    Ok(Json(outcomes))
}

/// Entity counts of the loaded catalog
pub async fn catalog_stats(State(state): State<AppState>) -> Json<CatalogStatsResponse> {
    let catalog = state.inner.read().await;
    Json(CatalogStatsResponse {
        movies: catalog.movies().len(),
        serials: catalog.serials().len(),
        actors: catalog.actors().len(),
        users: catalog.users().len(),
    })
}
