use thiserror::Error;

// ---------------------------------------------------------------------------
// ReferenceError
// ---------------------------------------------------------------------------

/// Failures while building the catalog or the interaction matrix.
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Reference data load failed ({0}): {1}")]
    Io(String, String),

    #[error("Reference data parse failed ({0}): {1}")]
    Parse(String, String),

    #[error("Drug catalog is empty")]
    EmptyCatalog,

    #[error("Duplicate drug id in catalog: {0}")]
    DuplicateDrugId(String),

    #[error("Safety score {score} out of range for {first} + {second}")]
    ScoreOutOfRange {
        first: String,
        second: String,
        score: u8,
    },

    #[error("Category pair declared twice: {0} + {1}")]
    DuplicatePair(String, String),
}

// ---------------------------------------------------------------------------
// AnalysisError
// ---------------------------------------------------------------------------

/// Caller-visible reasons an analysis was not produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("One or both medications are not selected")]
    MissingSelection,

    #[error("Both slots hold the same medication: {0}")]
    IdenticalSelection(String),

    #[error("Analysis cancelled before completion")]
    Cancelled,
}

impl AnalysisError {
    /// Text shown to the user next to the analyze button.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingSelection => {
                "Please select both medications to analyze their interaction."
            }
            Self::IdenticalSelection(_) => "Please select two different medications for analysis.",
            Self::Cancelled => GENERIC_FAILURE_MESSAGE,
        }
    }
}

/// Shown for any failure that is not a selection problem.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred during analysis. Please try again.";

/// Returned by a [`Latency`](super::latency::Latency) whose wait was cut short.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Wait cancelled")]
pub struct Cancelled;

impl From<Cancelled> for AnalysisError {
    fn from(_: Cancelled) -> Self {
        AnalysisError::Cancelled
    }
}
