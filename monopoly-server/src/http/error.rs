//! API error types with IntoResponse
//!
//! Three outcomes reach clients:
//! - 400 with a JSON reason, for input rejected before any query runs
//! - 404 with no body, for ids that match no row
//! - 500 with no body, for any storage failure (details are logged only)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// No row matched (404)
    NotFound,

    /// Storage failure, including aborted transactions (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "validation_error",
                    "message": e.to_string()
                })),
            )
                .into_response(),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Database(e) => {
                // Log the actual error, return a bare status
                tracing::error!(
                    kind = %e.kind(),
                    transaction = e.is_transaction(),
                    error = ?e,
                    "database error: {}",
                    e
                );
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

/// Send a lookup result as JSON, or 404 when nothing matched.
///
/// Every get/update/delete handler ends here so "not found" is reported
/// the same way everywhere.
pub fn data_or_404<T: Serialize>(data: Option<T>) -> Result<Json<T>, ApiError> {
    data.map(Json).ok_or(ApiError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use crate::models::RecordId;

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Blank { field: "name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "validation_error");
        assert_eq!(json["message"], "name must not be blank");
    }

    #[tokio::test]
    async fn not_found_is_404_without_body() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn database_error_is_500_without_detail() {
        let err = ApiError::from(DbError::query(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn transaction_error_is_500() {
        let err = DbError::query(sqlx::Error::PoolClosed).into_transaction();
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn data_or_404_passes_data_through() {
        let Json(found) = data_or_404(Some(RecordId { id: 7 })).unwrap();
        assert_eq!(found, RecordId { id: 7 });

        let missing = data_or_404::<RecordId>(None).unwrap_err();
        assert!(matches!(missing, ApiError::NotFound));
    }
}
