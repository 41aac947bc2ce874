pub mod drug;
pub mod enums;
pub mod interaction;

pub use drug::Drug;
pub use enums::{BodySystem, Frequency, InvalidEnum, RiskLevel, SafetyLevel, Severity};
pub use interaction::{AnalysisResult, BodySystemStatus, InteractionTemplate, SideEffect};
