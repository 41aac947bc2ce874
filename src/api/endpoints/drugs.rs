//! Drug search endpoints.
//!
//! - `GET /api/drugs?q=`: catalog search
//! - `GET /api/drugs/:id`: single entry

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::Drug;

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub drugs: Vec<Drug>,
}

/// `GET /api/drugs`: empty query lists the first catalog entries.
pub async fn search(
    State(ctx): State<ApiContext>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let drugs: Vec<Drug> = ctx
        .analyzer
        .catalog()
        .search(&query.q)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(query = %query.q, matches = drugs.len(), "Drug search");

    Ok(Json(SearchResponse {
        query: query.q,
        drugs,
    }))
}

/// `GET /api/drugs/:id`
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<Drug>, ApiError> {
    ctx.analyzer
        .catalog()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Drug not found: {id}")))
}
