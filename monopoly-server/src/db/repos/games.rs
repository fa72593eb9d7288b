//! Game repository
//!
//! Reads games and their scoreboards; deleting a game removes its
//! PlayerGame rows in the same transaction.

use sqlx::PgPool;

use crate::db::executor::{command, execute, query_many, query_one_or_none, statement};
use crate::db::transaction::run_transaction;
use crate::db::DbError;
use crate::models::{Game, GamePlayer, RecordId};

/// Game repository
pub struct GameRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> GameRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All games, in storage order.
    pub async fn list(&self) -> Result<Vec<Game>, DbError> {
        query_many(statement(r#"SELECT id, "time" FROM Game"#), self.pool).await
    }

    /// A single game by id.
    pub async fn get(&self, id: i32) -> Result<Option<Game>, DbError> {
        query_one_or_none(
            statement(r#"SELECT id, "time" FROM Game WHERE id = $1"#).bind(id),
            self.pool,
        )
        .await
    }

    /// Players in a game with their scores, best score first.
    ///
    /// Ties keep whatever order Postgres produces. A game without players
    /// and a game that does not exist both give an empty list; see
    /// [`GameRepo::scoreboard`] to tell them apart.
    pub async fn players(&self, id: i32) -> Result<Vec<GamePlayer>, DbError> {
        query_many(
            statement(
                r#"
                SELECT P.id, P.name, P.email, PG.score
                FROM PlayerGame AS PG
                JOIN Player AS P ON PG.playerID = P.id
                WHERE PG.gameID = $1
                ORDER BY PG.score DESC
                "#,
            )
            .bind(id),
            self.pool,
        )
        .await
    }

    /// Scoreboard for an existing game, `None` when the game is absent.
    pub async fn scoreboard(&self, id: i32) -> Result<Option<Vec<GamePlayer>>, DbError> {
        let players = self.players(id).await?;
        if !players.is_empty() {
            return Ok(Some(players));
        }

        // Only an empty board needs the extra lookup
        Ok(self.get(id).await?.map(|_| players))
    }

    /// Delete a game and every score recorded in it (atomic).
    pub async fn delete(&self, id: i32) -> Result<Option<RecordId>, DbError> {
        let deleted = run_transaction(self.pool, |conn| {
            Box::pin(async move {
                let scores = execute(
                    command("DELETE FROM PlayerGame WHERE gameID = $1").bind(id),
                    &mut *conn,
                )
                .await?;
                tracing::debug!(game_id = id, scores, "game scores deleted");

                query_one_or_none(
                    statement("DELETE FROM Game WHERE id = $1 RETURNING id").bind(id),
                    &mut *conn,
                )
                .await
            })
        })
        .await?;

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed_game(pool: &PgPool, scores: &[i32]) -> i32 {
        let game_id: i32 = sqlx::query_scalar("INSERT INTO Game DEFAULT VALUES RETURNING id")
            .fetch_one(pool)
            .await
            .unwrap();

        for (i, score) in scores.iter().enumerate() {
            let player_id: i32 = sqlx::query_scalar(
                "INSERT INTO Player(email, name) VALUES ($1, $2) RETURNING id",
            )
            .bind(format!("p{i}@x.io"))
            .bind(format!("p{i}"))
            .fetch_one(pool)
            .await
            .unwrap();

            sqlx::query("INSERT INTO PlayerGame(gameID, playerID, score) VALUES ($1, $2, $3)")
                .bind(game_id)
                .bind(player_id)
                .bind(score)
                .execute(pool)
                .await
                .unwrap();
        }

        game_id
    }

    async fn score_rows(pool: &PgPool, game_id: i32) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM PlayerGame WHERE gameID = $1")
            .bind(game_id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires database"]
    async fn players_ordered_by_score_desc(pool: PgPool) {
        let game_id = seed_game(&pool, &[30, 50, 10]).await;

        let scores: Vec<i32> = GameRepo::new(&pool)
            .players(game_id)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.score)
            .collect();
        assert_eq!(scores, vec![50, 30, 10]);
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires database"]
    async fn scoreboard_distinguishes_empty_from_missing(pool: PgPool) {
        let repo = GameRepo::new(&pool);
        let empty_game = seed_game(&pool, &[]).await;

        assert_eq!(repo.scoreboard(empty_game).await.unwrap(), Some(vec![]));
        assert_eq!(repo.scoreboard(empty_game + 1).await.unwrap(), None);
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires database"]
    async fn delete_removes_game_and_scores(pool: PgPool) {
        let repo = GameRepo::new(&pool);
        let game_id = seed_game(&pool, &[1, 2, 3]).await;

        let deleted = repo.delete(game_id).await.unwrap();
        assert_eq!(deleted, Some(RecordId { id: game_id }));
        assert_eq!(score_rows(&pool, game_id).await, 0);
        assert!(repo.get(game_id).await.unwrap().is_none());

        // Players themselves survive
        let players: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Player")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(players, 3);

        assert!(repo.delete(game_id).await.unwrap().is_none());
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires database"]
    async fn failed_parent_delete_restores_scores(pool: PgPool) {
        let repo = GameRepo::new(&pool);
        let game_id = seed_game(&pool, &[5, 6]).await;

        sqlx::raw_sql(
            r#"
            CREATE FUNCTION refuse_delete() RETURNS trigger AS $$
            BEGIN
                RAISE EXCEPTION 'simulated storage fault';
            END;
            $$ LANGUAGE plpgsql;
            CREATE TRIGGER game_refuse_delete BEFORE DELETE ON Game
                FOR EACH ROW EXECUTE FUNCTION refuse_delete();
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        let err = repo.delete(game_id).await.unwrap_err();
        assert!(err.is_transaction());

        // The association delete ran first but was rolled back
        assert_eq!(score_rows(&pool, game_id).await, 2);
        assert!(repo.get(game_id).await.unwrap().is_some());
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires database"]
    async fn failed_association_delete_keeps_game(pool: PgPool) {
        let repo = GameRepo::new(&pool);
        let game_id = seed_game(&pool, &[5]).await;

        sqlx::raw_sql(
            r#"
            CREATE FUNCTION refuse_delete() RETURNS trigger AS $$
            BEGIN
                RAISE EXCEPTION 'simulated storage fault';
            END;
            $$ LANGUAGE plpgsql;
            CREATE TRIGGER playergame_refuse_delete BEFORE DELETE ON PlayerGame
                FOR EACH ROW EXECUTE FUNCTION refuse_delete();
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        assert!(repo.delete(game_id).await.is_err());
        assert_eq!(score_rows(&pool, game_id).await, 1);
        assert!(repo.get(game_id).await.unwrap().is_some());
    }
}
