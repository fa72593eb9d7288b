//! Game records and per-game player scores

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Game row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Game {
    pub id: i32,
    pub time: DateTime<Utc>,
}

/// One player's standing in a game: the Player fields joined with the
/// PlayerGame score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct GamePlayer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub score: i32,
}
