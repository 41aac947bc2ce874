use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::drug::Drug;
use super::enums::{BodySystem, Frequency, RiskLevel, SafetyLevel, Severity};

/// Canned interaction record for a pair of drug categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionTemplate {
    pub safety_level: SafetyLevel,
    /// 0 (dangerous) to 100 (safe).
    pub safety_score: u8,
    pub interaction_type: String,
    pub mechanism: String,
    pub description: String,
    pub recommendations: Vec<String>,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideEffect {
    pub name: String,
    pub severity: Severity,
    pub frequency: Frequency,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySystemStatus {
    pub name: BodySystem,
    pub affected: bool,
    pub description: String,
    pub risk_level: RiskLevel,
}

/// A freshly generated analysis for one drug pair. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub id: Uuid,
    pub drug1: Drug,
    pub drug2: Drug,
    #[serde(flatten)]
    pub interaction: InteractionTemplate,
    pub side_effects: Vec<SideEffect>,
    pub affected_systems: Vec<BodySystemStatus>,
    pub analysis_timestamp: DateTime<Utc>,
    /// Percentage in 80..=99.
    pub confidence: u8,
}

impl AnalysisResult {
    pub fn safety_level(&self) -> SafetyLevel {
        self.interaction.safety_level
    }

    pub fn safety_score(&self) -> u8 {
        self.interaction.safety_score
    }

    pub fn severity(&self) -> Severity {
        self.interaction.severity
    }

    /// Systems flagged as affected, in reporting order.
    pub fn affected_system_names(&self) -> Vec<BodySystem> {
        self.affected_systems
            .iter()
            .filter(|s| s.affected)
            .map(|s| s.name)
            .collect()
    }
}
