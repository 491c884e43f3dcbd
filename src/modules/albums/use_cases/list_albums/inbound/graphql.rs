use async_graphql::{Context, Object};

use crate::modules::albums::adapters::inbound::graphql::GqlAlbum;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListAlbumsQuery;

#[Object]
impl ListAlbumsQuery {
    async fn albums(&self, context: &Context<'_>) -> Vec<GqlAlbum> {
        let state = context.data_unchecked::<AppState>();
        let albums = state.albums.list().await;
        albums.into_iter().map(Into::into).collect()
    }
}
