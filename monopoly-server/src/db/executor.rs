//! Query executor
//!
//! Thin wrappers over sqlx that fix the cardinality of each call and turn
//! failures into [`DbError`]. Statements are only built through
//! [`statement`] and [`command`], which take `&'static str`: the SQL text is
//! a compile-time constant and client values can only arrive through `.bind`.
//!
//! Every function accepts any Postgres executor, so the same call works on
//! the pool or inside a transaction.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{Executor, FromRow, Postgres};

use super::errors::DbError;

/// Row-returning statement mapped to `T`.
pub type Statement<'q, T> = QueryAs<'q, Postgres, T, PgArguments>;

/// Statement whose rows (if any) are ignored.
pub type Command<'q> = Query<'q, Postgres, PgArguments>;

/// Start a row-returning statement. Bind parameters with `.bind(..)`.
pub fn statement<'q, T>(sql: &'static str) -> Statement<'q, T>
where
    T: for<'r> FromRow<'r, PgRow>,
{
    sqlx::query_as(sql)
}

/// Start a statement executed only for its effect.
pub fn command<'q>(sql: &'static str) -> Command<'q> {
    sqlx::query(sql)
}

/// Zero or more rows. An empty result is not an error.
pub async fn query_many<'q, 'c, T, E>(stmt: Statement<'q, T>, executor: E) -> Result<Vec<T>, DbError>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    E: Executor<'c, Database = Postgres>,
{
    stmt.fetch_all(executor).await.map_err(DbError::query)
}

/// Zero or one row.
///
/// Callers key the statement on a unique column. If it still matches several
/// rows that is reported as [`DbError::TooManyRows`] rather than silently
/// returning the first.
pub async fn query_one_or_none<'q, 'c, T, E>(
    stmt: Statement<'q, T>,
    executor: E,
) -> Result<Option<T>, DbError>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    E: Executor<'c, Database = Postgres>,
{
    let mut rows = stmt.fetch_all(executor).await.map_err(DbError::query)?;
    match rows.len() {
        0 | 1 => Ok(rows.pop()),
        found => Err(DbError::TooManyRows { found }),
    }
}

/// Exactly one row, e.g. `INSERT .. RETURNING`. No row is a query error.
pub async fn query_exactly_one<'q, 'c, T, E>(stmt: Statement<'q, T>, executor: E) -> Result<T, DbError>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    E: Executor<'c, Database = Postgres>,
{
    stmt.fetch_one(executor).await.map_err(DbError::query)
}

/// Execute for effect only; returns the number of rows affected.
pub async fn execute<'q, 'c, E>(cmd: Command<'q>, executor: E) -> Result<u64, DbError>
where
    E: Executor<'c, Database = Postgres>,
{
    let result = cmd.execute(executor).await.map_err(DbError::query)?;
    Ok(result.rows_affected())
}
