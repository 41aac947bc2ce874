use serde::{Deserialize, Serialize};

/// A catalog entry. `category` is the interaction-matrix lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drug {
    pub id: String,
    pub name: String,
    pub generic_name: String,
    pub category: String,
    pub mechanism: String,
    pub common_side_effects: Vec<String>,
    pub body_systems_affected: Vec<String>,
}

impl Drug {
    /// Case-insensitive substring match on brand or generic name.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.generic_name.to_lowercase().contains(needle)
    }

    /// Whether this drug declares the given body system (exact name match).
    pub fn affects(&self, system: &str) -> bool {
        self.body_systems_affected.iter().any(|s| s == system)
    }
}
