//! Two-slot selection state behind the analyze button.
//!
//! Validation runs before the analyzer is touched: an unset slot is
//! `MissingSelection`, the same drug in both slots is `IdenticalSelection`.
//! Selections survive every failure so the user can retry without
//! re-entering them.

use rand::Rng;

use crate::models::{AnalysisResult, Drug};

use super::engine::InteractionAnalyzer;
use super::latency::Latency;
use super::types::AnalysisError;

#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    drug1: Option<Drug>,
    drug2: Option<Drug>,
    last_result: Option<AnalysisResult>,
    last_error: Option<AnalysisError>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_first(&mut self, drug: Drug) {
        self.drug1 = Some(drug);
    }

    pub fn select_second(&mut self, drug: Drug) {
        self.drug2 = Some(drug);
    }

    pub fn clear_first(&mut self) {
        self.drug1 = None;
    }

    pub fn clear_second(&mut self) {
        self.drug2 = None;
    }

    pub fn first(&self) -> Option<&Drug> {
        self.drug1.as_ref()
    }

    pub fn second(&self) -> Option<&Drug> {
        self.drug2.as_ref()
    }

    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
    }

    pub fn last_error(&self) -> Option<&AnalysisError> {
        self.last_error.as_ref()
    }

    /// Whether the analyze action should be offered at all.
    pub fn can_analyze(&self) -> bool {
        self.drug1.is_some() && self.drug2.is_some()
    }

    /// Clear both selections and any prior outcome.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Both selected drugs, or the reason analysis may not start.
    pub fn validate(&self) -> Result<(&Drug, &Drug), AnalysisError> {
        validate_pair(self.drug1.as_ref(), self.drug2.as_ref())
    }

    /// Validate, wait out the injected latency, then analyze.
    ///
    /// On success the result is also kept as `last_result`. On failure the
    /// error is kept as `last_error`; selections are never touched.
    pub async fn analyze<L, R>(
        &mut self,
        analyzer: &InteractionAnalyzer,
        latency: &L,
        rng: &mut R,
    ) -> Result<AnalysisResult, AnalysisError>
    where
        L: Latency,
        R: Rng + ?Sized,
    {
        let outcome = self.run(analyzer, latency, rng).await;
        match &outcome {
            Ok(result) => {
                self.last_result = Some(result.clone());
            }
            Err(err) => {
                tracing::warn!(error = %err, "Interaction analysis not produced");
                self.last_error = Some(err.clone());
            }
        }
        outcome
    }

    async fn run<L, R>(
        &mut self,
        analyzer: &InteractionAnalyzer,
        latency: &L,
        rng: &mut R,
    ) -> Result<AnalysisResult, AnalysisError>
    where
        L: Latency,
        R: Rng + ?Sized,
    {
        // Validate before clearing anything so a rejected request keeps the
        // previous result on screen.
        self.validate()?;

        self.last_error = None;
        self.last_result = None;

        latency.wait().await?;

        let (drug_a, drug_b) = self.validate()?;
        Ok(analyzer.analyze(drug_a, drug_b, rng))
    }
}

/// Shared validation for any caller holding two optional selections.
pub fn validate_pair<'a>(
    drug1: Option<&'a Drug>,
    drug2: Option<&'a Drug>,
) -> Result<(&'a Drug, &'a Drug), AnalysisError> {
    match (drug1, drug2) {
        (Some(a), Some(b)) if a.id == b.id => Err(AnalysisError::IdenticalSelection(a.id.clone())),
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(AnalysisError::MissingSelection),
    }
}
