//! Expands a resolved template into per-analysis side-effect and
//! body-system lists.
//!
//! Both functions are pure apart from the injected random source; a seeded
//! `StdRng` makes their output reproducible.

use std::collections::HashSet;

use rand::Rng;

use crate::models::{BodySystem, BodySystemStatus, Drug, Frequency, RiskLevel, Severity, SideEffect};

use super::messages::MessageTemplates;

/// Draw above which a side effect is reported as common.
const COMMON_THRESHOLD: f64 = 0.7;
/// Draw above which (and at or below `COMMON_THRESHOLD`) it is uncommon.
const UNCOMMON_THRESHOLD: f64 = 0.5;
/// Draw above which an affected system is high risk.
const HIGH_RISK_THRESHOLD: f64 = 0.6;

/// Map a uniform draw in `[0, 1)` to a frequency bucket.
/// common 30%, uncommon 20%, rare 50%.
pub fn frequency_for_draw(p: f64) -> Frequency {
    if p > COMMON_THRESHOLD {
        Frequency::Common
    } else if p > UNCOMMON_THRESHOLD {
        Frequency::Uncommon
    } else {
        Frequency::Rare
    }
}

/// Map a uniform draw in `[0, 1)` to the risk of an affected system.
pub fn risk_for_draw(p: f64) -> RiskLevel {
    if p > HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}

/// Merge both drugs' side effects, first-seen order, no duplicate names.
/// Every entry carries `severity`; frequency is drawn per entry.
pub fn synthesize_side_effects<R: Rng + ?Sized>(
    drug_a: &Drug,
    drug_b: &Drug,
    severity: Severity,
    rng: &mut R,
) -> Vec<SideEffect> {
    let mut seen = HashSet::new();

    drug_a
        .common_side_effects
        .iter()
        .chain(&drug_b.common_side_effects)
        .filter(|name| seen.insert(name.as_str()))
        .map(|name| SideEffect {
            name: name.clone(),
            severity,
            frequency: frequency_for_draw(rng.gen::<f64>()),
            description: MessageTemplates::side_effect(name, &drug_a.name, &drug_b.name),
        })
        .collect()
}

/// One status per body system, in [`BodySystem::ALL`] order.
///
/// Unaffected systems are always low risk and consume no draw.
pub fn synthesize_body_systems<R: Rng + ?Sized>(
    drug_a: &Drug,
    drug_b: &Drug,
    rng: &mut R,
) -> Vec<BodySystemStatus> {
    BodySystem::ALL
        .iter()
        .map(|&system| {
            let affected = drug_a.affects(system.as_str()) || drug_b.affects(system.as_str());
            if affected {
                BodySystemStatus {
                    name: system,
                    affected,
                    description: MessageTemplates::system_affected(&drug_a.name, &drug_b.name),
                    risk_level: risk_for_draw(rng.gen::<f64>()),
                }
            } else {
                BodySystemStatus {
                    name: system,
                    affected,
                    description: MessageTemplates::system_unaffected(),
                    risk_level: RiskLevel::Low,
                }
            }
        })
        .collect()
}
