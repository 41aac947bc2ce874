use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{ServerConfig, DEFAULT_PORT};
use crate::interaction::latency::DEFAULT_LATENCY_MS;
use crate::interaction::SearchLimits;

#[derive(Clone, Debug, Parser)]
#[command(version, about, verbatim_doc_comment)]
///
/// DrugLens
///
/// Pick two medications and get a demo interaction analysis. Not medical advice.
///
pub struct Args {
    /// Address to bind on.
    #[arg(long, default_value = "127.0.0.1", env = "DRUGLENS_HOST")]
    pub host: IpAddr,

    /// Port to bind on. 0 picks an ephemeral port.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "DRUGLENS_PORT")]
    pub port: u16,

    /// Directory with the web page (index.html and assets).
    #[arg(short = 'd', long, env = "DRUGLENS_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Simulated analysis latency in milliseconds.
    #[arg(long, default_value_t = DEFAULT_LATENCY_MS, env = "DRUGLENS_LATENCY_MS")]
    pub latency_ms: u64,

    /// Fixed random seed for reproducible analyses.
    #[arg(long, env = "DRUGLENS_SEED")]
    pub seed: Option<u64>,

    /// JSON drug catalog to use instead of the bundled one.
    #[arg(long, env = "DRUGLENS_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// JSON interaction matrix to use instead of the bundled one.
    #[arg(long, env = "DRUGLENS_MATRIX")]
    pub matrix: Option<PathBuf>,

    /// Entries listed for an empty search.
    #[arg(long, default_value_t = SearchLimits::default().empty_query, env = "DRUGLENS_EMPTY_QUERY_RESULTS")]
    pub empty_query_results: usize,

    /// Maximum matches for a search.
    #[arg(long, default_value_t = SearchLimits::default().max_results, env = "DRUGLENS_MAX_RESULTS")]
    pub max_results: usize,

    /// Log filter, overrides RUST_LOG (e.g. "debug" or "druglens_lib=trace").
    #[arg(short, long, env = "DRUGLENS_LOG")]
    pub log_level: Option<String>,
}

impl Args {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            static_dir: self.static_dir.clone(),
            latency: Duration::from_millis(self.latency_ms),
            rng_seed: self.seed,
            catalog_path: self.catalog.clone(),
            matrix_path: self.matrix.clone(),
            search_limits: SearchLimits {
                empty_query: self.empty_query_results,
                max_results: self.max_results,
            },
        }
    }
}
