//! monopoly-server: HTTP service for the Monopoly database
//!
//! Exposes players, games, and per-game scores over a small REST API.
//! The interesting part is the data layer: every statement is parameterized,
//! lookups have explicit cardinality, and deletes that span PlayerGame and
//! its parent table run in one transaction.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, run_migrations, DbConfig, DbError};
pub use http::{build_router, run_server, ApiError, ServerConfig};
