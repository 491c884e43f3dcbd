use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use tracing::info;

use crate::modules::albums::adapters::inbound::graphql::{GqlAlbum, to_gql_error};
use crate::modules::albums::core::album::NewAlbum;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct NewAlbumInput {
    pub title: String,
    pub artist: String,
    pub price: f64,
    pub image_url: String,
}

impl From<NewAlbumInput> for NewAlbum {
    fn from(input: NewAlbumInput) -> Self {
        Self {
            title: input.title,
            artist: input.artist,
            price: input.price,
            image_url: input.image_url,
        }
    }
}

#[derive(Default)]
pub struct CreateAlbumMutation;

#[Object]
impl CreateAlbumMutation {
    async fn create_album(
        &self,
        context: &Context<'_>,
        input: NewAlbumInput,
    ) -> GqlResult<GqlAlbum> {
        let state = context.data_unchecked::<AppState>();
        let album = state
            .albums
            .create(input.into())
            .await
            .map_err(to_gql_error)?;
        info!(album_id = album.id, "created album");
        Ok(album.into())
    }
}
