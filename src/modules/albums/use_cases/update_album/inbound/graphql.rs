use async_graphql::{Context, InputObject, MaybeUndefined, Object, Result as GqlResult};
use tracing::info;

use crate::modules::albums::adapters::inbound::graphql::{GqlAlbum, to_gql_error};
use crate::modules::albums::core::album::{AlbumId, AlbumPatch};
use crate::shared::http::non_null;
use crate::shell::state::AppState;

/// Omitted fields stay unchanged; `null` is rejected.
#[derive(InputObject, Default)]
pub struct AlbumPatchInput {
    pub title: MaybeUndefined<String>,
    pub artist: MaybeUndefined<String>,
    pub price: MaybeUndefined<f64>,
    pub image_url: MaybeUndefined<String>,
}

fn nested<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}

impl TryFrom<AlbumPatchInput> for AlbumPatch {
    type Error = async_graphql::Error;

    fn try_from(input: AlbumPatchInput) -> Result<Self, Self::Error> {
        Ok(AlbumPatch {
            title: non_null("title", nested(input.title), to_gql_error)?,
            artist: non_null("artist", nested(input.artist), to_gql_error)?,
            price: non_null("price", nested(input.price), to_gql_error)?,
            image_url: non_null("imageUrl", nested(input.image_url), to_gql_error)?,
        })
    }
}

#[derive(Default)]
pub struct UpdateAlbumMutation;

#[Object]
impl UpdateAlbumMutation {
    async fn update_album(
        &self,
        context: &Context<'_>,
        id: AlbumId,
        input: AlbumPatchInput,
    ) -> GqlResult<GqlAlbum> {
        let state = context.data_unchecked::<AppState>();
        let patch = AlbumPatch::try_from(input)?;
        let album = state
            .albums
            .update(id, patch)
            .await
            .map_err(to_gql_error)?;
        info!(album_id = album.id, "updated album");
        Ok(album.into())
    }
}
