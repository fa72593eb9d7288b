//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS (browser and mobile clients)
//! - Request tracing
//! - Graceful shutdown
//! - Uniform 400/404/500 error responses

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::{data_or_404, ApiError};
