use axum::{extract::State, http::StatusCode};
use tracing::info;

use crate::shared::http::{AlbumIdPath, ApiError};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    AlbumIdPath(id): AlbumIdPath,
) -> Result<StatusCode, ApiError> {
    state.albums.delete(id).await?;
    info!(album_id = id, "deleted album");
    Ok(StatusCode::NO_CONTENT)
}
