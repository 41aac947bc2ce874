use clap::Parser;

use druglens_lib::api::start_server;
use druglens_lib::cli::Args;
use druglens_lib::config;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    druglens_lib::init_tracing(args.log_level.as_deref());

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = args.server_config();
    let mut server = match start_server(&config).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = server.addr(), "Listening");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }

    server.shutdown();
    server.stopped().await;
}
