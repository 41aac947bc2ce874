use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::models::{Drug, InteractionTemplate, SafetyLevel, Severity};

use super::types::ReferenceError;

/// Category-pair lookup table with a fallback template.
///
/// Entries are stored in one direction only (`first -> second`);
/// [`resolve`](Self::resolve) checks both.
#[derive(Debug, Clone)]
pub struct InteractionMatrix {
    entries: HashMap<String, HashMap<String, InteractionTemplate>>,
    default: InteractionTemplate,
}

/// On-disk shape of a matrix file.
#[derive(Debug, Deserialize)]
struct MatrixFile {
    #[serde(default = "default_template")]
    default: InteractionTemplate,
    rules: Vec<MatrixRule>,
}

#[derive(Debug, Deserialize)]
struct MatrixRule {
    categories: (String, String),
    #[serde(flatten)]
    template: InteractionTemplate,
}

impl InteractionMatrix {
    /// Empty matrix: every pair resolves to `default`.
    pub fn new(default: InteractionTemplate) -> Self {
        Self {
            entries: HashMap::new(),
            default,
        }
    }

    /// Add an entry for `first -> second`.
    ///
    /// Fails if the pair is already modeled in either direction or the score
    /// exceeds 100.
    pub fn insert(
        &mut self,
        first: &str,
        second: &str,
        template: InteractionTemplate,
    ) -> Result<(), ReferenceError> {
        if template.safety_score > 100 {
            return Err(ReferenceError::ScoreOutOfRange {
                first: first.into(),
                second: second.into(),
                score: template.safety_score,
            });
        }
        if self.lookup(first, second).is_some() {
            return Err(ReferenceError::DuplicatePair(first.into(), second.into()));
        }
        self.entries
            .entry(first.to_string())
            .or_default()
            .insert(second.to_string(), template);
        Ok(())
    }

    /// Parse a matrix file: `{ "default": {..}, "rules": [{ "categories": [a, b], ..}] }`.
    pub fn from_json(json: &str) -> Result<Self, ReferenceError> {
        let file: MatrixFile = serde_json::from_str(json)
            .map_err(|e| ReferenceError::Parse("interaction matrix".into(), e.to_string()))?;

        if file.default.safety_score > 100 {
            return Err(ReferenceError::ScoreOutOfRange {
                first: "default".into(),
                second: "default".into(),
                score: file.default.safety_score,
            });
        }

        let mut matrix = Self::new(file.default);
        for rule in file.rules {
            let (first, second) = rule.categories;
            matrix.insert(&first, &second, rule.template)?;
        }
        Ok(matrix)
    }

    pub fn load(path: &Path) -> Result<Self, ReferenceError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ReferenceError::Io(path.display().to_string(), e.to_string()))?;
        let matrix = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), pairs = matrix.len(), "Interaction matrix loaded");
        Ok(matrix)
    }

    /// The bundled demo matrix.
    pub fn builtin() -> Self {
        let mut entries: HashMap<String, HashMap<String, InteractionTemplate>> = HashMap::new();
        for (first, second, template) in builtin_rules() {
            entries
                .entry(first.to_string())
                .or_default()
                .insert(second.to_string(), template);
        }
        Self {
            entries,
            default: default_template(),
        }
    }

    /// Number of modeled category pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn default_template(&self) -> &InteractionTemplate {
        &self.default
    }

    /// Whether either direction of the pair has an entry.
    pub fn is_modeled(&self, first: &str, second: &str) -> bool {
        self.lookup(first, second).is_some()
    }

    /// Template for two drugs, keyed by their categories in either order.
    pub fn resolve(&self, drug_a: &Drug, drug_b: &Drug) -> &InteractionTemplate {
        self.resolve_categories(&drug_a.category, &drug_b.category)
    }

    pub fn resolve_categories(&self, first: &str, second: &str) -> &InteractionTemplate {
        match self.lookup(first, second) {
            Some(template) => template,
            None => {
                tracing::debug!(first, second, "Unmodeled category pair, using default template");
                &self.default
            }
        }
    }

    fn lookup(&self, first: &str, second: &str) -> Option<&InteractionTemplate> {
        self.directed(first, second)
            .or_else(|| self.directed(second, first))
    }

    fn directed(&self, from: &str, to: &str) -> Option<&InteractionTemplate> {
        self.entries.get(from).and_then(|row| row.get(to))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Fallback for pairs with no entry.
pub fn default_template() -> InteractionTemplate {
    InteractionTemplate {
        safety_level: SafetyLevel::Caution,
        safety_score: 70,
        interaction_type: "Unknown interaction".into(),
        mechanism: "Interaction profile not fully characterized".into(),
        description: "CAUTION: Limited data available on this drug combination. \
                      Exercise caution and monitor closely."
            .into(),
        recommendations: strings(&[
            "Consult healthcare provider",
            "Monitor for unusual symptoms",
            "Start with lowest effective doses",
        ]),
        severity: Severity::Moderate,
    }
}

fn builtin_rules() -> Vec<(&'static str, &'static str, InteractionTemplate)> {
    vec![
        (
            "NSAID",
            "Anticoagulant",
            InteractionTemplate {
                safety_level: SafetyLevel::Danger,
                safety_score: 25,
                interaction_type: "Pharmacodynamic".into(),
                mechanism: "Increased bleeding risk due to antiplatelet effects of NSAIDs \
                            combined with anticoagulation"
                    .into(),
                description: "DANGEROUS: Combined use significantly increases bleeding risk. \
                              Both medications affect blood clotting through different mechanisms."
                    .into(),
                recommendations: strings(&[
                    "Avoid concurrent use if possible",
                    "If necessary, use lowest effective doses",
                    "Monitor closely for bleeding signs",
                    "Consider alternative pain management",
                ]),
                severity: Severity::Severe,
            },
        ),
        (
            "NSAID",
            "Beta-blocker",
            InteractionTemplate {
                safety_level: SafetyLevel::Caution,
                safety_score: 65,
                interaction_type: "Pharmacodynamic".into(),
                mechanism: "NSAIDs may reduce antihypertensive effects of beta-blockers".into(),
                description: "CAUTION: NSAIDs may decrease the blood pressure lowering effects \
                              of beta-blockers."
                    .into(),
                recommendations: strings(&[
                    "Monitor blood pressure regularly",
                    "Use lowest effective NSAID dose",
                    "Consider alternative pain relief methods",
                ]),
                severity: Severity::Moderate,
            },
        ),
        (
            "Statin",
            "SSRI",
            InteractionTemplate {
                safety_level: SafetyLevel::Safe,
                safety_score: 85,
                interaction_type: "Minimal interaction".into(),
                mechanism: "No significant pharmacokinetic or pharmacodynamic interaction".into(),
                description: "SAFE: These medications can generally be taken together safely."
                    .into(),
                recommendations: strings(&[
                    "Continue regular monitoring for each medication",
                    "Report any unusual symptoms to healthcare provider",
                ]),
                severity: Severity::Mild,
            },
        ),
        (
            "ACE Inhibitor",
            "Antidiabetic",
            InteractionTemplate {
                safety_level: SafetyLevel::Safe,
                safety_score: 90,
                interaction_type: "Beneficial interaction".into(),
                mechanism: "ACE inhibitors may enhance insulin sensitivity".into(),
                description: "SAFE: These medications work well together and may provide \
                              cardiovascular benefits."
                    .into(),
                recommendations: strings(&[
                    "Continue regular monitoring",
                    "May improve overall cardiovascular outcomes",
                ]),
                severity: Severity::Mild,
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::catalog::DrugCatalog;

    fn by_name<'a>(catalog: &'a DrugCatalog, name: &str) -> &'a Drug {
        catalog
            .drugs()
            .iter()
            .find(|d| d.name == name)
            .unwrap()
    }

    #[test]
    fn nsaid_anticoagulant_is_dangerous() {
        let catalog = DrugCatalog::builtin();
        let matrix = InteractionMatrix::builtin();
        let t = matrix.resolve(by_name(&catalog, "Aspirin"), by_name(&catalog, "Warfarin"));
        assert_eq!(t.safety_level, SafetyLevel::Danger);
        assert_eq!(t.safety_score, 25);
        assert_eq!(t.severity, Severity::Severe);
        assert_eq!(t.recommendations.len(), 4);
    }

    #[test]
    fn reverse_direction_resolves_same_template() {
        let catalog = DrugCatalog::builtin();
        let matrix = InteractionMatrix::builtin();
        let simva = by_name(&catalog, "Simvastatin");
        let sertra = by_name(&catalog, "Sertraline");
        assert_eq!(matrix.resolve(simva, sertra), matrix.resolve(sertra, simva));
        assert_eq!(matrix.resolve(sertra, simva).safety_score, 85);
    }

    #[test]
    fn resolution_is_symmetric_for_every_pair() {
        let catalog = DrugCatalog::builtin();
        let matrix = InteractionMatrix::builtin();
        for a in catalog.drugs() {
            for b in catalog.drugs() {
                assert_eq!(matrix.resolve(a, b), matrix.resolve(b, a), "{} / {}", a.name, b.name);
            }
        }
    }

    #[test]
    fn unmodeled_pairs_fall_back_to_default() {
        let catalog = DrugCatalog::builtin();
        let matrix = InteractionMatrix::builtin();
        let mut unmodeled = 0;
        for a in catalog.drugs() {
            for b in catalog.drugs() {
                if matrix.is_modeled(&a.category, &b.category) {
                    continue;
                }
                unmodeled += 1;
                let t = matrix.resolve(a, b);
                assert_eq!(t.safety_score, 70);
                assert_eq!(t.severity, Severity::Moderate);
                assert_eq!(t.safety_level, SafetyLevel::Caution);
            }
        }
        assert!(unmodeled > 0);
    }

    #[test]
    fn beta_blocker_and_ppi_use_default() {
        let catalog = DrugCatalog::builtin();
        let matrix = InteractionMatrix::builtin();
        let t = matrix.resolve(by_name(&catalog, "Metoprolol"), by_name(&catalog, "Omeprazole"));
        assert_eq!(t, matrix.default_template());
        assert_eq!(t.interaction_type, "Unknown interaction");
    }

    #[test]
    fn builtin_models_four_pairs() {
        let matrix = InteractionMatrix::builtin();
        assert_eq!(matrix.len(), 4);
        assert!(matrix.is_modeled("Beta-blocker", "NSAID"));
        assert!(!matrix.is_modeled("NSAID", "NSAID"));
    }

    #[test]
    fn insert_rejects_reverse_duplicate() {
        let mut matrix = InteractionMatrix::builtin();
        let err = matrix
            .insert("Anticoagulant", "NSAID", default_template())
            .unwrap_err();
        assert!(matches!(err, ReferenceError::DuplicatePair(..)));
    }

    #[test]
    fn insert_rejects_score_above_100() {
        let mut matrix = InteractionMatrix::new(default_template());
        let mut template = default_template();
        template.safety_score = 101;
        let err = matrix.insert("A", "B", template).unwrap_err();
        assert!(matches!(err, ReferenceError::ScoreOutOfRange { score: 101, .. }));
        assert!(matrix.is_empty());
    }

    #[test]
    fn from_json_builds_rules_and_keeps_default() {
        let json = r#"{
            "rules": [{
                "categories": ["Macrolide", "Statin"],
                "safetyLevel": "danger",
                "safetyScore": 20,
                "interactionType": "Pharmacokinetic",
                "mechanism": "CYP3A4 inhibition",
                "description": "Raised statin exposure.",
                "recommendations": ["Pause the statin"],
                "severity": "severe"
            }]
        }"#;
        let matrix = InteractionMatrix::from_json(json).unwrap();
        assert_eq!(matrix.len(), 1);
        let t = matrix.resolve_categories("Statin", "Macrolide");
        assert_eq!(t.safety_score, 20);
        assert_eq!(matrix.default_template().safety_score, 70);
    }

    #[test]
    fn from_json_rejects_out_of_range_default() {
        let json = r#"{
            "default": {
                "safetyLevel": "caution",
                "safetyScore": 150,
                "interactionType": "x",
                "mechanism": "x",
                "description": "x",
                "recommendations": [],
                "severity": "moderate"
            },
            "rules": []
        }"#;
        let err = InteractionMatrix::from_json(json).unwrap_err();
        assert!(matches!(err, ReferenceError::ScoreOutOfRange { score: 150, .. }));
    }

    #[test]
    fn from_json_rejects_unknown_enum_value() {
        let json = r#"{
            "rules": [{
                "categories": ["A", "B"],
                "safetyLevel": "fatal",
                "safetyScore": 1,
                "interactionType": "x",
                "mechanism": "x",
                "description": "x",
                "recommendations": [],
                "severity": "severe"
            }]
        }"#;
        assert!(matches!(
            InteractionMatrix::from_json(json),
            Err(ReferenceError::Parse(..))
        ));
    }
}
