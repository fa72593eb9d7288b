//! Custom Axum extractors

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::request::Parts;

use crate::models::{PlayerInput, PlayerInputBody, ValidationError};
use super::error::ApiError;

/// Extract a record id from the path.
///
/// Ids are 32-bit integers. Anything else (including text carrying SQL such
/// as `1; DELETE FROM Player`) cannot name a row, so it is a 404 and no
/// statement is issued.
pub struct RecordPath(pub i32);

impl<S> FromRequestParts<S> for RecordPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        let id = raw.parse::<i32>().map_err(|_| {
            tracing::debug!(id = %raw, "path id is not an integer");
            ApiError::NotFound
        })?;

        Ok(Self(id))
    }
}

/// Extract and validate a player create/update body.
pub struct ValidPlayerInput(pub PlayerInput);

impl<S> FromRequest<S> for ValidPlayerInput
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body): Json<PlayerInputBody> = Json::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                ApiError::Validation(ValidationError::MalformedBody {
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(PlayerInput::try_from(body)?))
    }
}
