//! Player endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::PlayerRepo;
use crate::http::error::{data_or_404, ApiError};
use crate::http::extractors::{RecordPath, ValidPlayerInput};
use crate::http::server::AppState;
use crate::models::{Player, RecordId};

/// GET /players - every player, possibly none
async fn list_players(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Player>>, ApiError> {
    let players = PlayerRepo::new(&state.pool).list().await?;
    Ok(Json(players))
}

/// GET /players/{id}
async fn get_player(
    State(state): State<Arc<AppState>>,
    RecordPath(id): RecordPath,
) -> Result<Json<Player>, ApiError> {
    data_or_404(PlayerRepo::new(&state.pool).get(id).await?)
}

/// POST /players - storage assigns the id
async fn create_player(
    State(state): State<Arc<AppState>>,
    ValidPlayerInput(input): ValidPlayerInput,
) -> Result<Json<RecordId>, ApiError> {
    let created = PlayerRepo::new(&state.pool).create(&input).await?;
    Ok(Json(created))
}

/// PUT /players/{id}
async fn update_player(
    State(state): State<Arc<AppState>>,
    RecordPath(id): RecordPath,
    ValidPlayerInput(input): ValidPlayerInput,
) -> Result<Json<RecordId>, ApiError> {
    data_or_404(PlayerRepo::new(&state.pool).update(id, &input).await?)
}

/// DELETE /players/{id} - removes the player's scores too
async fn delete_player(
    State(state): State<Arc<AppState>>,
    RecordPath(id): RecordPath,
) -> Result<Json<RecordId>, ApiError> {
    data_or_404(PlayerRepo::new(&state.pool).delete(id).await?)
}

/// Player routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/players", get(list_players).post(create_player))
        .route(
            "/players/{id}",
            get(get_player).put(update_player).delete(delete_player),
        )
}
