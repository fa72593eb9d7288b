//! Transaction coordinator
//!
//! Runs an ordered sequence of statements on one connection inside a single
//! Postgres transaction. The steps are written as one async closure; each
//! `?` short-circuits out of the sequence, the transaction is rolled back,
//! and the error comes back as [`DbError::Transaction`]. On success the
//! value of the last step is returned after commit.

use futures::future::BoxFuture;
use sqlx::{PgConnection, PgPool};

use super::errors::DbError;

/// Run `steps` atomically.
///
/// Isolation is Postgres' default (READ COMMITTED). A concurrent transaction
/// touching the same rows waits on row locks rather than seeing a partial
/// cascade.
///
/// # Example
///
/// ```ignore
/// let deleted = run_transaction(&pool, |conn| {
///     Box::pin(async move {
///         execute(command("DELETE FROM PlayerGame WHERE gameID = $1").bind(id), &mut *conn).await?;
///         query_one_or_none(statement("DELETE FROM Game WHERE id = $1 RETURNING id").bind(id), &mut *conn).await
///     })
/// })
/// .await?;
/// ```
pub async fn run_transaction<T, F>(pool: &PgPool, steps: F) -> Result<T, DbError>
where
    T: Send,
    F: for<'t> FnOnce(&'t mut PgConnection) -> BoxFuture<'t, Result<T, DbError>>,
{
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| DbError::query(e).into_transaction())?;

    match steps(&mut *tx).await {
        Ok(value) => {
            tx.commit()
                .await
                .map_err(|e| DbError::query(e).into_transaction())?;
            Ok(value)
        }
        Err(err) => {
            tracing::debug!(error = %err, "transaction step failed, rolling back");
            // A failed rollback leaves the transaction to be discarded with
            // its connection, which aborts it server-side.
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback failed");
            }
            Err(err.into_transaction())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::errors::QueryErrorKind;
    use crate::db::executor::{command, execute, query_exactly_one, statement};
    use crate::models::RecordId;

    async fn player_count(pool: &PgPool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM Player")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires database"]
    async fn commits_all_steps(pool: PgPool) {
        let last = run_transaction(&pool, |conn| {
            Box::pin(async move {
                execute(
                    command("INSERT INTO Player(email, name) VALUES ('a@x.io', 'a')"),
                    &mut *conn,
                )
                .await?;
                query_exactly_one::<RecordId, _>(
                    statement("INSERT INTO Player(email, name) VALUES ('b@x.io', 'b') RETURNING id"),
                    &mut *conn,
                )
                .await
            })
        })
        .await
        .unwrap();

        assert!(last.id > 0);
        assert_eq!(player_count(&pool).await, 2);
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires database"]
    async fn failing_step_rolls_back_earlier_steps(pool: PgPool) {
        let err = run_transaction(&pool, |conn| {
            Box::pin(async move {
                execute(
                    command("INSERT INTO Player(email, name) VALUES ('a@x.io', 'a')"),
                    &mut *conn,
                )
                .await?;
                // No such game: foreign key violation
                execute(
                    command("INSERT INTO PlayerGame(gameID, playerID, score) VALUES (-1, -1, 0)"),
                    &mut *conn,
                )
                .await
            })
        })
        .await
        .unwrap_err();

        assert!(err.is_transaction());
        assert_eq!(err.kind(), QueryErrorKind::Constraint);
        assert_eq!(player_count(&pool).await, 0);
    }
}
