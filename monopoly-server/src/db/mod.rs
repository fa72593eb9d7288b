//! Database layer - connection pool, query executor, transactions, repositories
//!
//! # Design Principles
//!
//! - One shared pool, passed by reference; no global connection
//! - SQL text is always a constant, client values are always bound
//! - Cardinality is explicit at every call (many / one-or-none / exactly-one)
//! - Multi-table deletes run inside a single transaction

pub mod errors;
pub mod executor;
pub mod pool;
pub mod repos;
pub mod transaction;

pub use errors::{DbError, QueryErrorKind};
pub use pool::{create_pool, run_migrations, DbConfig, DEFAULT_MAX_CONNECTIONS, MIGRATOR};
pub use repos::*;
pub use transaction::run_transaction;
