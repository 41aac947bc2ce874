//! HTTP surface.
//!
//! JSON endpoints live under `/api/`; the optional static directory serves
//! the web page for everything else. `app_router()` returns a plain `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::app_router;
pub use server::{start_server, start_server_with, DrugLensServer, ServerSession};
pub use types::ApiContext;
