use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::Drug;

use super::types::ReferenceError;

/// Result caps applied by [`DrugCatalog::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Entries returned for an empty or whitespace query.
    pub empty_query: usize,
    /// Maximum matches returned for a non-empty query.
    pub max_results: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            empty_query: 5,
            max_results: 8,
        }
    }
}

/// Ordered, read-only list of drugs. Built once at start-up and shared.
#[derive(Debug, Clone)]
pub struct DrugCatalog {
    drugs: Vec<Drug>,
    limits: SearchLimits,
}

impl DrugCatalog {
    /// Build a catalog, rejecting empty input and duplicate ids.
    pub fn new(drugs: Vec<Drug>, limits: SearchLimits) -> Result<Self, ReferenceError> {
        if drugs.is_empty() {
            return Err(ReferenceError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for drug in &drugs {
            if !seen.insert(drug.id.as_str()) {
                return Err(ReferenceError::DuplicateDrugId(drug.id.clone()));
            }
        }
        Ok(Self { drugs, limits })
    }

    /// Parse a JSON array of drugs.
    pub fn from_json(json: &str, limits: SearchLimits) -> Result<Self, ReferenceError> {
        let drugs: Vec<Drug> = serde_json::from_str(json)
            .map_err(|e| ReferenceError::Parse("drug catalog".into(), e.to_string()))?;
        Self::new(drugs, limits)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path, limits: SearchLimits) -> Result<Self, ReferenceError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ReferenceError::Io(path.display().to_string(), e.to_string()))?;
        let catalog = Self::from_json(&json, limits)?;
        tracing::info!(path = %path.display(), drugs = catalog.len(), "Drug catalog loaded");
        Ok(catalog)
    }

    /// The bundled demo catalog.
    pub fn builtin() -> Self {
        Self {
            drugs: builtin_drugs(),
            limits: SearchLimits::default(),
        }
    }

    /// Same entries as [`builtin`](Self::builtin) with different caps.
    pub fn builtin_with_limits(limits: SearchLimits) -> Self {
        Self {
            drugs: builtin_drugs(),
            limits,
        }
    }

    pub fn len(&self) -> usize {
        self.drugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    pub fn drugs(&self) -> &[Drug] {
        &self.drugs
    }

    pub fn get(&self, id: &str) -> Option<&Drug> {
        self.drugs.iter().find(|d| d.id == id)
    }

    /// Free-text search over brand and generic names.
    ///
    /// An empty query yields the first few entries; otherwise matches keep
    /// catalog order and are capped.
    pub fn search(&self, query: &str) -> Vec<&Drug> {
        if query.trim().is_empty() {
            return self.drugs.iter().take(self.limits.empty_query).collect();
        }

        let needle = query.to_lowercase();
        self.drugs
            .iter()
            .filter(|d| d.matches_lowercase(&needle))
            .take(self.limits.max_results)
            .collect()
    }
}

fn drug(
    id: &str,
    name: &str,
    generic_name: &str,
    category: &str,
    mechanism: &str,
    side_effects: &[&str],
    systems: &[&str],
) -> Drug {
    Drug {
        id: id.into(),
        name: name.into(),
        generic_name: generic_name.into(),
        category: category.into(),
        mechanism: mechanism.into(),
        common_side_effects: side_effects.iter().map(|s| s.to_string()).collect(),
        body_systems_affected: systems.iter().map(|s| s.to_string()).collect(),
    }
}

fn builtin_drugs() -> Vec<Drug> {
    vec![
        drug(
            "1",
            "Aspirin",
            "Acetylsalicylic acid",
            "NSAID",
            "COX enzyme inhibitor",
            &["Stomach irritation", "Bleeding risk", "Tinnitus"],
            &["Cardiovascular", "Gastrointestinal", "Blood"],
        ),
        drug(
            "2",
            "Warfarin",
            "Warfarin sodium",
            "Anticoagulant",
            "Vitamin K antagonist",
            &["Bleeding", "Bruising", "Hair loss"],
            &["Blood", "Cardiovascular"],
        ),
        drug(
            "3",
            "Metoprolol",
            "Metoprolol tartrate",
            "Beta-blocker",
            "Beta-1 receptor antagonist",
            &["Fatigue", "Dizziness", "Cold hands"],
            &["Cardiovascular", "Respiratory"],
        ),
        drug(
            "4",
            "Lisinopril",
            "Lisinopril",
            "ACE Inhibitor",
            "Angiotensin-converting enzyme inhibitor",
            &["Dry cough", "Dizziness", "Hyperkalemia"],
            &["Cardiovascular", "Renal"],
        ),
        drug(
            "5",
            "Metformin",
            "Metformin hydrochloride",
            "Antidiabetic",
            "Glucose production inhibitor",
            &["Nausea", "Diarrhea", "Metallic taste"],
            &["Gastrointestinal", "Endocrine"],
        ),
        drug(
            "6",
            "Simvastatin",
            "Simvastatin",
            "Statin",
            "HMG-CoA reductase inhibitor",
            &["Muscle pain", "Liver enzyme elevation", "Headache"],
            &["Musculoskeletal", "Hepatic"],
        ),
        drug(
            "7",
            "Omeprazole",
            "Omeprazole",
            "Proton pump inhibitor",
            "H+/K+ ATPase inhibitor",
            &["Headache", "Nausea", "Diarrhea"],
            &["Gastrointestinal"],
        ),
        drug(
            "8",
            "Sertraline",
            "Sertraline hydrochloride",
            "SSRI",
            "Serotonin reuptake inhibitor",
            &["Nausea", "Insomnia", "Sexual dysfunction"],
            &["Central Nervous System", "Gastrointestinal"],
        ),
    ]
}
