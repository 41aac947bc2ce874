pub mod api;
pub mod cli;
pub mod config;
pub mod interaction;
pub mod models;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// An explicit filter wins over `RUST_LOG`; without either the
/// [`config::default_log_filter`] applies.
pub fn init_tracing(filter: Option<&str>) {
    let env_filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
    };

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
