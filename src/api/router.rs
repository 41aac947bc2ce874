//! API router.
//!
//! JSON routes are nested under `/api/`. When a static directory is
//! configured, every other path is served from it with `index.html` as the
//! fallback for client-side routes.

use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the application router.
pub fn app_router(ctx: ApiContext, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/drugs", get(endpoints::drugs::search))
        .route("/drugs/:id", get(endpoints::drugs::detail))
        .route("/analyze", post(endpoints::analyze::analyze))
        .with_state(ctx);

    let mut router = Router::new().nest("/api", api);

    if let Some(dir) = static_dir {
        if dir.join("index.html").is_file() {
            tracing::info!(dir = %dir.display(), "Serving static assets");
            let assets = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
            router = router.fallback_service(assets);
        } else {
            tracing::warn!(dir = %dir.display(), "Static directory has no index.html, not serving assets");
        }
    }

    router.layer(CorsLayer::permissive())
}
