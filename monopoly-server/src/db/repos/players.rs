//! Player repository
//!
//! - list/get: plain reads, absent rows are `None`
//! - create: INSERT .. RETURNING id, storage assigns the id
//! - delete: PlayerGame rows first, then the Player row, in one transaction

use sqlx::PgPool;

use crate::db::executor::{
    command, execute, query_exactly_one, query_many, query_one_or_none, statement,
};
use crate::db::transaction::run_transaction;
use crate::db::DbError;
use crate::models::{Player, PlayerInput, RecordId};

/// Player repository
pub struct PlayerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PlayerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All players, in storage order.
    pub async fn list(&self) -> Result<Vec<Player>, DbError> {
        query_many(statement("SELECT id, email, name FROM Player"), self.pool).await
    }

    /// A single player by id.
    pub async fn get(&self, id: i32) -> Result<Option<Player>, DbError> {
        query_one_or_none(
            statement("SELECT id, email, name FROM Player WHERE id = $1").bind(id),
            self.pool,
        )
        .await
    }

    /// Insert a player and return the generated id.
    pub async fn create(&self, input: &PlayerInput) -> Result<RecordId, DbError> {
        let created: RecordId = query_exactly_one(
            statement("INSERT INTO Player(email, name) VALUES ($1, $2) RETURNING id")
                .bind(input.email())
                .bind(input.name()),
            self.pool,
        )
        .await?;

        tracing::debug!(id = created.id, "player created");
        Ok(created)
    }

    /// Overwrite email and name. `None` when no player has this id.
    pub async fn update(&self, id: i32, input: &PlayerInput) -> Result<Option<RecordId>, DbError> {
        query_one_or_none(
            statement("UPDATE Player SET email = $1, name = $2 WHERE id = $3 RETURNING id")
                .bind(input.email())
                .bind(input.name())
                .bind(id),
            self.pool,
        )
        .await
    }

    /// Delete a player and every score recorded for them (atomic).
    ///
    /// `None` when no player has this id; the association delete then
    /// matched nothing either, so the transaction commits a no-op.
    pub async fn delete(&self, id: i32) -> Result<Option<RecordId>, DbError> {
        let deleted = run_transaction(self.pool, |conn| {
            Box::pin(async move {
                let scores = execute(
                    command("DELETE FROM PlayerGame WHERE playerID = $1").bind(id),
                    &mut *conn,
                )
                .await?;
                tracing::debug!(player_id = id, scores, "player scores deleted");

                query_one_or_none(
                    statement("DELETE FROM Player WHERE id = $1 RETURNING id").bind(id),
                    &mut *conn,
                )
                .await
            })
        })
        .await?;

        Ok(deleted)
    }
}
