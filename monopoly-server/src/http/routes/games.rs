//! Game endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::GameRepo;
use crate::http::error::{data_or_404, ApiError};
use crate::http::extractors::RecordPath;
use crate::http::server::AppState;
use crate::models::{Game, GamePlayer, RecordId};

/// GET /games
async fn list_games(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Game>>, ApiError> {
    let games = GameRepo::new(&state.pool).list().await?;
    Ok(Json(games))
}

/// GET /games/{id} and /games/{id}/players - scoreboard, best score first
async fn game_players(
    State(state): State<Arc<AppState>>,
    RecordPath(id): RecordPath,
) -> Result<Json<Vec<GamePlayer>>, ApiError> {
    data_or_404(GameRepo::new(&state.pool).scoreboard(id).await?)
}

/// DELETE /games/{id} - removes the game's scores too
async fn delete_game(
    State(state): State<Arc<AppState>>,
    RecordPath(id): RecordPath,
) -> Result<Json<RecordId>, ApiError> {
    data_or_404(GameRepo::new(&state.pool).delete(id).await?)
}

/// Game routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/games", get(list_games))
        .route("/games/{id}", get(game_players).delete(delete_game))
        .route("/games/{id}/players", get(game_players))
}
