use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::albums::use_cases::create_album::inbound::graphql::CreateAlbumMutation;
use crate::modules::albums::use_cases::delete_album::inbound::graphql::DeleteAlbumMutation;
use crate::modules::albums::use_cases::get_album::inbound::graphql::GetAlbumQuery;
use crate::modules::albums::use_cases::list_albums::inbound::graphql::ListAlbumsQuery;
use crate::modules::albums::use_cases::update_album::inbound::graphql::UpdateAlbumMutation;
pub use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListAlbumsQuery, GetAlbumQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    CreateAlbumMutation,
    UpdateAlbumMutation,
    DeleteAlbumMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
