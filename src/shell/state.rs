use crate::modules::albums::core::ports::AlbumRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<dyn AlbumRepository + Send + Sync>,
}
