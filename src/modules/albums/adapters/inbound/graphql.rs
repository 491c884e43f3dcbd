use async_graphql::SimpleObject;

use crate::modules::albums::core::album::{Album, AlbumId};

#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(name = "Album")]
pub struct GqlAlbum {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
    pub image_url: String,
}

impl From<Album> for GqlAlbum {
    fn from(a: Album) -> Self {
        Self {
            id: a.id,
            title: a.title,
            artist: a.artist,
            price: a.price,
            image_url: a.image_url,
        }
    }
}

pub fn to_gql_error(error: impl std::fmt::Display) -> async_graphql::Error {
    async_graphql::Error::new(error.to_string())
}
