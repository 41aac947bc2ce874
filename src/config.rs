use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::interaction::latency::DEFAULT_LATENCY_MS;
use crate::interaction::SearchLimits;

/// Application-level constants
pub const APP_NAME: &str = "DrugLens";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default port for the demo server.
pub const DEFAULT_PORT: u16 = 8080;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "druglens=info,druglens_lib=info,tower_http=warn"
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    /// Port to bind on (0 = ephemeral).
    pub port: u16,
    /// Directory holding the built web page (index.html + assets).
    pub static_dir: Option<PathBuf>,
    /// Pause applied before each analysis response.
    pub latency: Duration,
    /// Fixed seed for reproducible draws; entropy when unset.
    pub rng_seed: Option<u64>,
    /// JSON drug catalog replacing the bundled one.
    pub catalog_path: Option<PathBuf>,
    /// JSON interaction matrix replacing the bundled one.
    pub matrix_path: Option<PathBuf>,
    pub search_limits: SearchLimits,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            static_dir: None,
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            rng_seed: None,
            catalog_path: None,
            matrix_path: None,
            search_limits: SearchLimits::default(),
        }
    }
}
