//! HTTP server for Galley.
//!
//! Exposes the dish and order collections over a JSON REST surface. Every
//! request body and success response is a `{ "data": ... }` envelope; every
//! failure is `{ "error": message }` with the status of the pipeline stage
//! that refused it.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::{build_router, ROUTES};
pub use server::GalleyServer;
pub use state::AppState;
