use axum::{Extension, Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::albums::use_cases::create_album::inbound::http as create_http;
use crate::modules::albums::use_cases::delete_album::inbound::http as delete_http;
use crate::modules::albums::use_cases::get_album::inbound::http as get_http;
use crate::modules::albums::use_cases::list_albums::inbound::http as list_http;
use crate::modules::albums::use_cases::update_album::inbound::http as update_http;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

pub const INDEX_MESSAGE: &str = "Hit the /albums endpoint to retrieve a list of albums!";

async fn index() -> &'static str {
    INDEX_MESSAGE
}

/// Any origin, method and header; credentials are never allowed.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route("/", get(index))
        .route("/albums", get(list_http::handle).post(create_http::handle))
        .route(
            "/albums/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .with_state(state)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
}
