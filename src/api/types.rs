//! Shared state for the HTTP layer.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::ServerConfig;
use crate::interaction::{
    DrugCatalog, InteractionAnalyzer, InteractionMatrix, ReferenceError, SimulatedLatency,
};

// ═══════════════════════════════════════════════════════════
// API context: shared state for the router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes.
///
/// The analyzer is read-only; the random source is the only mutable state
/// and is locked for the synchronous analysis call only.
#[derive(Clone)]
pub struct ApiContext {
    pub analyzer: InteractionAnalyzer,
    pub rng: Arc<Mutex<StdRng>>,
    pub latency: SimulatedLatency,
}

impl ApiContext {
    pub fn new(analyzer: InteractionAnalyzer, rng: StdRng, latency: SimulatedLatency) -> Self {
        Self {
            analyzer,
            rng: Arc::new(Mutex::new(rng)),
            latency,
        }
    }

    /// Build the context described by `config`, loading fixture files when set.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ReferenceError> {
        let catalog = match &config.catalog_path {
            Some(path) => DrugCatalog::load(path, config.search_limits)?,
            None => DrugCatalog::builtin_with_limits(config.search_limits),
        };
        let matrix = match &config.matrix_path {
            Some(path) => InteractionMatrix::load(path)?,
            None => InteractionMatrix::builtin(),
        };

        let rng = match config.rng_seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded random source");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Ok(Self::new(
            InteractionAnalyzer::new(Arc::new(catalog), Arc::new(matrix)),
            rng,
            SimulatedLatency::new(config.latency),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn from_default_config_uses_builtin_data() {
        let ctx = ApiContext::from_config(&ServerConfig::default()).unwrap();
        assert_eq!(ctx.analyzer.catalog().len(), 8);
        assert_eq!(ctx.analyzer.matrix().len(), 4);
        assert_eq!(ctx.latency.delay(), Duration::from_secs(2));
    }

    #[test]
    fn from_config_applies_search_limits() {
        let mut config = ServerConfig::default();
        config.search_limits.empty_query = 2;
        let ctx = ApiContext::from_config(&config).unwrap();
        assert_eq!(ctx.analyzer.catalog().search("").len(), 2);
    }

    #[test]
    fn from_config_propagates_load_errors() {
        let config = ServerConfig {
            catalog_path: Some("/nonexistent/catalog.json".into()),
            ..ServerConfig::default()
        };
        assert!(matches!(
            ApiContext::from_config(&config),
            Err(ReferenceError::Io(..))
        ));
    }
}
