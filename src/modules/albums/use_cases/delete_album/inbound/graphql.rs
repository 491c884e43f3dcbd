use async_graphql::{Context, Object, Result as GqlResult};
use tracing::info;

use crate::modules::albums::adapters::inbound::graphql::to_gql_error;
use crate::modules::albums::core::album::AlbumId;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteAlbumMutation;

#[Object]
impl DeleteAlbumMutation {
    async fn delete_album(&self, context: &Context<'_>, id: AlbumId) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state.albums.delete(id).await.map_err(to_gql_error)?;
        info!(album_id = id, "deleted album");
        Ok(true)
    }
}
