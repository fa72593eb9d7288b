//! Data-layer error taxonomy
//!
//! Every storage failure is a [`DbError`]. "Not found" is not an error at
//! this layer: lookups return `Option` and the HTTP layer decides on 404.

use std::fmt;

use sqlx::error::ErrorKind;

/// Coarse classification of a storage failure, used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorKind {
    /// Unique, foreign-key, not-null, or check constraint rejected the row
    Constraint,
    /// Pool exhausted, connection dropped, TLS or socket failure
    Connection,
    /// Statement rejected by the server (syntax, unknown relation, bad cast)
    Statement,
    /// Row came back but could not be mapped to the record type
    Decode,
    /// A statement that must return a row returned none
    NoRows,
    /// A lookup expected at most one row and got several
    TooManyRows,
    Other,
}

impl QueryErrorKind {
    /// Classify a sqlx error.
    pub fn classify(err: &sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Self::Constraint,
                // SQLSTATE class 42 is syntax/access rule, 22 is data exception
                _ => match db.code().as_deref().map(|c| &c[..2.min(c.len())]) {
                    Some("42") | Some("22") => Self::Statement,
                    Some("08") => Self::Connection,
                    _ => Self::Other,
                },
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Protocol(_) => Self::Connection,
            sqlx::Error::RowNotFound => Self::NoRows,
            sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => Self::Decode,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constraint => "constraint",
            Self::Connection => "connection",
            Self::Statement => "statement",
            Self::Decode => "decode",
            Self::NoRows => "no_rows",
            Self::TooManyRows => "too_many_rows",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for QueryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A single statement failed
    #[error("query failed ({kind}): {source}")]
    Query {
        kind: QueryErrorKind,
        #[source]
        source: sqlx::Error,
    },

    /// A one-or-none lookup matched more than one row
    #[error("expected at most one row, got {found}")]
    TooManyRows { found: usize },

    /// A transaction was aborted and rolled back; nothing it did was committed
    #[error("transaction aborted ({kind}): {source}")]
    Transaction {
        kind: QueryErrorKind,
        #[source]
        source: Box<DbError>,
    },
}

impl DbError {
    /// Wrap a sqlx error from a single statement.
    pub fn query(source: sqlx::Error) -> Self {
        Self::Query {
            kind: QueryErrorKind::classify(&source),
            source,
        }
    }

    /// Mark an error as the cause of a transaction abort.
    ///
    /// Already-wrapped transaction errors are returned unchanged.
    pub fn into_transaction(self) -> Self {
        match self {
            Self::Transaction { .. } => self,
            other => Self::Transaction {
                kind: other.kind(),
                source: Box::new(other),
            },
        }
    }

    /// Classification of the underlying failure.
    pub fn kind(&self) -> QueryErrorKind {
        match self {
            Self::Query { kind, .. } | Self::Transaction { kind, .. } => *kind,
            Self::TooManyRows { .. } => QueryErrorKind::TooManyRows,
        }
    }

    pub fn is_transaction(&self) -> bool {
        matches!(self, Self::Transaction { .. })
    }
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        Self::query(e)
    }
}
