//! `POST /api/analyze`: interaction analysis for two selected drugs.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::interaction::{validate_pair, AnalysisError, Latency};
use crate::models::AnalysisResult;

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default, alias = "drug1Id")]
    pub drug1_id: Option<String>,
    #[serde(default, alias = "drug2Id")]
    pub drug2_id: Option<String>,
}

impl AnalyzeRequest {
    /// Both ids, blank ones treated as unset.
    fn selected_ids(&self) -> Result<(&str, &str), AnalysisError> {
        match (non_blank(&self.drug1_id), non_blank(&self.drug2_id)) {
            (Some(a), Some(b)) if a == b => Err(AnalysisError::IdenticalSelection(a.to_string())),
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(AnalysisError::MissingSelection),
        }
    }
}

fn non_blank(id: &Option<String>) -> Option<&str> {
    id.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Validates the selection before touching the catalog, waits out the
/// configured latency, then analyzes.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let (id1, id2) = request.selected_ids()?;

    let catalog = ctx.analyzer.catalog();
    let drug1 = catalog
        .get(id1)
        .ok_or_else(|| ApiError::NotFound(format!("Drug not found: {id1}")))?;
    let drug2 = catalog
        .get(id2)
        .ok_or_else(|| ApiError::NotFound(format!("Drug not found: {id2}")))?;
    let (drug1, drug2) = validate_pair(Some(drug1), Some(drug2))?;

    ctx.latency.wait().await.map_err(AnalysisError::from)?;

    let result = {
        let mut rng = ctx
            .rng
            .lock()
            .map_err(|_| ApiError::Internal("random source lock poisoned".into()))?;
        ctx.analyzer.analyze(drug1, drug2, &mut *rng)
    };

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(a: Option<&str>, b: Option<&str>) -> AnalyzeRequest {
        AnalyzeRequest {
            drug1_id: a.map(String::from),
            drug2_id: b.map(String::from),
        }
    }

    #[test]
    fn blank_id_is_missing() {
        assert_eq!(
            request(Some("1"), Some("  ")).selected_ids().unwrap_err(),
            AnalysisError::MissingSelection
        );
        assert_eq!(
            AnalyzeRequest::default().selected_ids().unwrap_err(),
            AnalysisError::MissingSelection
        );
    }

    #[test]
    fn same_id_is_identical() {
        assert_eq!(
            request(Some("4"), Some("4")).selected_ids().unwrap_err(),
            AnalysisError::IdenticalSelection("4".into())
        );
    }

    #[test]
    fn camel_case_aliases_accepted() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"drug1Id": "1", "drug2Id": "2"}"#).unwrap();
        assert_eq!(req.selected_ids().unwrap(), ("1", "2"));
    }
}
