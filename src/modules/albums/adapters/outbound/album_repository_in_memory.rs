// In memory implementation of the AlbumRepository port.
//
// Responsibilities
// - Hold every album in a single map keyed by id.
// - Serialize all reads and writes through one lock, taken once per operation.
// - Assign ids as the highest present id + 1, so a freed top id is handed out again.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::modules::albums::core::album::{Album, AlbumId, AlbumPatch, NewAlbum};
use crate::modules::albums::core::ports::{AlbumRepository, AlbumRepositoryError};
use crate::modules::albums::core::seed::seed_albums;

#[derive(Default)]
pub struct InMemoryAlbumRepository {
    albums: Mutex<BTreeMap<AlbumId, Album>>,
}

impl InMemoryAlbumRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the sample catalog, ids 1 through 6.
    pub fn seeded() -> Self {
        Self::with_albums(seed_albums())
    }

    fn with_albums(albums: impl IntoIterator<Item = Album>) -> Self {
        Self {
            albums: Mutex::new(albums.into_iter().map(|a| (a.id, a)).collect()),
        }
    }
}

#[async_trait]
impl AlbumRepository for InMemoryAlbumRepository {
    async fn list(&self) -> Vec<Album> {
        self.albums.lock().await.values().cloned().collect()
    }

    async fn get(&self, id: AlbumId) -> Result<Album, AlbumRepositoryError> {
        self.albums
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or(AlbumRepositoryError::NotFound(id))
    }

    async fn create(&self, album: NewAlbum) -> Result<Album, AlbumRepositoryError> {
        album.validate()?;

        let mut albums = self.albums.lock().await;
        let id = albums.last_key_value().map_or(1, |(last, _)| last + 1);
        let created = album.into_album(id);
        albums.insert(id, created.clone());
        debug!(album_id = id, total = albums.len(), "album stored");
        Ok(created)
    }

    async fn update(&self, id: AlbumId, patch: AlbumPatch) -> Result<Album, AlbumRepositoryError> {
        patch.validate()?;

        let mut albums = self.albums.lock().await;
        let current = albums
            .get_mut(&id)
            .ok_or(AlbumRepositoryError::NotFound(id))?;
        let updated = current.apply(&patch);
        updated.validate()?;
        *current = updated.clone();
        debug!(album_id = id, "album replaced");
        Ok(updated)
    }

    async fn delete(&self, id: AlbumId) -> Result<(), AlbumRepositoryError> {
        let mut albums = self.albums.lock().await;
        if albums.remove(&id).is_none() {
            return Err(AlbumRepositoryError::NotFound(id));
        }
        debug!(album_id = id, total = albums.len(), "album removed");
        Ok(())
    }
}
