//! Drug-pair interaction core: catalog search, category-pair resolution and
//! the synthesis of side-effect and body-system lists.
//!
//! Everything here is synchronous and in-memory except the injected
//! [`Latency`] awaited by [`AnalysisSession::analyze`].

pub mod catalog;
pub mod engine;
pub mod latency;
pub mod matrix;
pub mod messages;
pub mod session;
pub mod synthesis;
pub mod types;

pub use catalog::{DrugCatalog, SearchLimits};
pub use engine::InteractionAnalyzer;
pub use latency::{Latency, NoLatency, SimulatedLatency};
pub use matrix::InteractionMatrix;
pub use session::{validate_pair, AnalysisSession};
pub use types::{AnalysisError, Cancelled, ReferenceError};
