use axum::{Json, extract::State, response::IntoResponse};

use crate::shared::http::{AlbumIdPath, ApiError};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AlbumIdPath(id): AlbumIdPath,
) -> Result<impl IntoResponse, ApiError> {
    let album = state.albums.get(id).await?;
    Ok(Json(album))
}
