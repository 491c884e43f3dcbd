// Transport helpers shared by every album HTTP handler.
//
// Responsibilities
// - Turn repository and validation failures into status codes with a JSON `detail` body.
// - Extract and check the `{id}` path segment.
// - Tell an absent JSON field apart from an explicit `null`.
// - Reject `null` for update fields that cannot be cleared, for REST and GraphQL alike.

use std::num::IntErrorKind;

use axum::{
    Json,
    extract::{FromRequestParts, Path, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::modules::albums::core::album::{AlbumId, AlbumValidationError};
use crate::modules::albums::core::ports::AlbumRepositoryError;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unprocessable(String),

    /// A path id too large to have ever been assigned.
    #[error("album {0} not found")]
    UnknownAlbum(String),

    #[error(transparent)]
    Repository(#[from] AlbumRepositoryError),
}

impl From<AlbumValidationError> for ApiError {
    fn from(error: AlbumValidationError) -> Self {
        ApiError::Unprocessable(error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Repository(AlbumRepositoryError::NotFound(id)) => {
                (StatusCode::NOT_FOUND, format!("Album {id} not found"))
            }
            ApiError::Repository(error @ AlbumRepositoryError::Invalid(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
            }
            ApiError::UnknownAlbum(raw) => {
                (StatusCode::NOT_FOUND, format!("Album {raw} not found"))
            }
            ApiError::Unprocessable(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// The `{id}` path segment, guaranteed to be an integer >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlbumIdPath(pub AlbumId);

impl<S> FromRequestParts<S> for AlbumIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;
        parse_album_id(&raw).map(AlbumIdPath)
    }
}

pub fn parse_album_id(raw: &str) -> Result<AlbumId, ApiError> {
    match raw.parse::<AlbumId>() {
        Ok(id) if id >= 1 => Ok(id),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            Err(ApiError::UnknownAlbum(raw.to_string()))
        }
        _ => Err(ApiError::Unprocessable(format!(
            "album id must be an integer greater than or equal to 1, got {raw:?}"
        ))),
    }
}

/// Use with `#[serde(default, deserialize_with = "present")]` on an
/// `Option<Option<T>>`: absent is `None`, `null` is `Some(None)`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Rejects an explicit `null` for a field that cannot be cleared, building
/// the failure with `error` so each transport keeps its own error type.
pub fn non_null<T, E>(
    field: &str,
    value: Option<Option<T>>,
    error: impl FnOnce(String) -> E,
) -> Result<Option<T>, E> {
    match value {
        Some(None) => Err(error(format!("{field} may not be null"))),
        Some(Some(v)) => Ok(Some(v)),
        None => Ok(None),
    }
}
