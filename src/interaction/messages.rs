/// Text templates for generated side-effect and body-system descriptions.
pub struct MessageTemplates;

impl MessageTemplates {
    pub fn side_effect(effect: &str, drug_a: &str, drug_b: &str) -> String {
        format!(
            "{} may be enhanced when {} and {} are used together.",
            effect, drug_a, drug_b,
        )
    }

    pub fn system_affected(drug_a: &str, drug_b: &str) -> String {
        format!(
            "This system may be affected by the interaction between {} and {}.",
            drug_a, drug_b,
        )
    }

    pub fn system_unaffected() -> String {
        "This system is not expected to be significantly affected.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_effect_names_both_drugs() {
        let msg = MessageTemplates::side_effect("Nausea", "Metformin", "Omeprazole");
        assert_eq!(
            msg,
            "Nausea may be enhanced when Metformin and Omeprazole are used together."
        );
    }

    #[test]
    fn affected_system_names_both_drugs() {
        let msg = MessageTemplates::system_affected("Aspirin", "Warfarin");
        assert!(msg.contains("Aspirin and Warfarin"));
    }

    #[test]
    fn unaffected_system_is_drug_agnostic() {
        assert!(!MessageTemplates::system_unaffected().contains(" and "));
    }
}
