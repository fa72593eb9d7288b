//! Domain models with validation at construction
//!
//! Client input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod player;
pub mod game;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub use validation::ValidationError;
pub use player::{Player, PlayerInput, PlayerInputBody};
pub use game::{Game, GamePlayer};

/// `{id}` result of create, update, and delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RecordId {
    pub id: i32,
}
