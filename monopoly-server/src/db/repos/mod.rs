//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and follows these patterns:
//! - Every statement goes through the query executor (bound parameters only)
//! - Lookups keyed on the primary key return `Option`
//! - Cascading deletes run in one transaction

pub mod players;
pub mod games;

pub use players::PlayerRepo;
pub use games::GameRepo;
