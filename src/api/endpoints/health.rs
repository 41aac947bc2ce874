//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub drugs: usize,
    pub interactions: usize,
}

/// `GET /api/health`: liveness plus reference data sizes.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
        drugs: ctx.analyzer.catalog().len(),
        interactions: ctx.analyzer.matrix().len(),
    }))
}
