// Ports define what the album use cases need from storage, without implementing it.
//
// Boundaries
// - No concrete storage here. Adapters implement `AlbumRepository`.
// - Callers never see the backing collection, only owned copies of records.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::albums::core::album::{
    Album, AlbumId, AlbumPatch, AlbumValidationError, NewAlbum,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlbumRepositoryError {
    #[error("album {0} not found")]
    NotFound(AlbumId),

    #[error(transparent)]
    Invalid(#[from] AlbumValidationError),
}

/// Sole owner of album state. Every operation is atomic: callers observe a
/// mutation either fully applied or not at all.
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// All albums, ascending by id.
    async fn list(&self) -> Vec<Album>;

    async fn get(&self, id: AlbumId) -> Result<Album, AlbumRepositoryError>;

    /// Stores `album` under the next id (highest current id + 1, or 1 when empty).
    async fn create(&self, album: NewAlbum) -> Result<Album, AlbumRepositoryError>;

    /// Overlays the fields present in `patch` and returns the merged album.
    async fn update(&self, id: AlbumId, patch: AlbumPatch) -> Result<Album, AlbumRepositoryError>;

    async fn delete(&self, id: AlbumId) -> Result<(), AlbumRepositoryError>;
}
