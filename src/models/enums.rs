use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unknown wire string for one of the closed enums below.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field} value: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(SafetyLevel {
    Safe => "safe",
    Caution => "caution",
    Danger => "danger",
});

str_enum!(Severity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(Frequency {
    Rare => "rare",
    Uncommon => "uncommon",
    Common => "common",
    VeryCommon => "very common",
});

str_enum!(RiskLevel {
    Low => "low",
    Medium => "medium",
    High => "high",
});

str_enum!(BodySystem {
    Cardiovascular => "Cardiovascular",
    CentralNervousSystem => "Central Nervous System",
    Gastrointestinal => "Gastrointestinal",
    Respiratory => "Respiratory",
    Renal => "Renal",
    Hepatic => "Hepatic",
    Endocrine => "Endocrine",
    Musculoskeletal => "Musculoskeletal",
    Blood => "Blood",
});

impl BodySystem {
    /// Every body system, in reporting order.
    pub const ALL: [BodySystem; 9] = [
        BodySystem::Cardiovascular,
        BodySystem::CentralNervousSystem,
        BodySystem::Gastrointestinal,
        BodySystem::Respiratory,
        BodySystem::Renal,
        BodySystem::Hepatic,
        BodySystem::Endocrine,
        BodySystem::Musculoskeletal,
        BodySystem::Blood,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn safety_level_parses_wire_strings() {
        assert_eq!(SafetyLevel::from_str("danger").unwrap(), SafetyLevel::Danger);
        assert_eq!(SafetyLevel::Caution.as_str(), "caution");
    }

    #[test]
    fn unknown_value_names_the_field() {
        let err = Severity::from_str("catastrophic").unwrap_err();
        assert_eq!(err.field, "Severity");
        assert_eq!(err.value, "catastrophic");
    }

    #[test]
    fn very_common_keeps_its_space_on_the_wire() {
        let json = serde_json::to_string(&Frequency::VeryCommon).unwrap();
        assert_eq!(json, "\"very common\"");
        let back: Frequency = serde_json::from_str("\"very common\"").unwrap();
        assert_eq!(back, Frequency::VeryCommon);
    }

    #[test]
    fn body_systems_are_nine_distinct_names() {
        let names: std::collections::HashSet<&str> =
            BodySystem::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names.len(), 9);
        assert_eq!(BodySystem::ALL[1].as_str(), "Central Nervous System");
        assert_eq!(BodySystem::ALL[8], BodySystem::Blood);
    }
}
