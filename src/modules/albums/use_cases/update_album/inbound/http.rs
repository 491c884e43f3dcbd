use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::info;

use crate::modules::albums::core::album::AlbumPatch;
use crate::shared::http::{AlbumIdPath, ApiError, non_null, present};
use crate::shell::state::AppState;

/// Every field is optional; an explicit `null` is rejected rather than read as "absent".
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAlbumBody {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub artist: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub image_url: Option<Option<String>>,
}

impl TryFrom<UpdateAlbumBody> for AlbumPatch {
    type Error = ApiError;

    fn try_from(body: UpdateAlbumBody) -> Result<Self, Self::Error> {
        Ok(AlbumPatch {
            title: non_null("title", body.title, ApiError::Unprocessable)?,
            artist: non_null("artist", body.artist, ApiError::Unprocessable)?,
            price: non_null("price", body.price, ApiError::Unprocessable)?,
            image_url: non_null("image_url", body.image_url, ApiError::Unprocessable)?,
        })
    }
}

pub async fn handle(
    State(state): State<AppState>,
    AlbumIdPath(id): AlbumIdPath,
    body: Result<Json<UpdateAlbumBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let patch = AlbumPatch::try_from(body)?;
    patch.validate()?;

    let album = state.albums.update(id, patch).await?;
    info!(album_id = album.id, "updated album");
    Ok(Json(album))
}
