use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::albums::adapters::inbound::graphql::{GqlAlbum, to_gql_error};
use crate::modules::albums::core::album::AlbumId;
use crate::modules::albums::core::ports::AlbumRepositoryError;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct GetAlbumQuery;

#[Object]
impl GetAlbumQuery {
    /// `null` when no album has this id.
    async fn album(&self, context: &Context<'_>, id: AlbumId) -> GqlResult<Option<GqlAlbum>> {
        let state = context.data_unchecked::<AppState>();
        match state.albums.get(id).await {
            Ok(album) => Ok(Some(album.into())),
            Err(AlbumRepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(to_gql_error(e)),
        }
    }
}
