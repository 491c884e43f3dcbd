use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use crate::modules::albums::core::album::NewAlbum;
use crate::shared::http::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<NewAlbum>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(new_album) = body?;
    new_album.validate()?;

    let album = state.albums.create(new_album).await?;
    info!(album_id = album.id, "created album");
    Ok((StatusCode::CREATED, Json(album)))
}

#[cfg(test)]
mod create_album_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use rstest::rstest;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::{body_json, seeded_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/albums", post(handle))
            .with_state(state)
    }

    fn post_json(body: impl Into<String>) -> Request<Body> {
        Request::post("/albums")
            .header("content-type", "application/json")
            .body(Body::from(body.into()))
            .unwrap()
    }

    fn valid_body() -> Value {
        json!({
            "title": "My Album",
            "artist": "Me",
            "price": 1.25,
            "image_url": "https://example.com/cover.png"
        })
    }

    #[tokio::test]
    async fn it_should_return_201_with_the_created_album() {
        let state = seeded_state();
        let request = post_json(valid_body().to_string());

        let response = app(state.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({
                "id": 7,
                "title": "My Album",
                "artist": "Me",
                "price": 1.25,
                "image_url": "https://example.com/cover.png"
            })
        );
        assert_eq!(state.albums.list().await.len(), 7);
    }

    #[tokio::test]
    async fn it_should_return_422_for_a_body_that_is_not_json() {
        let state = seeded_state();

        let request = post_json("not-json");
        let response = app(state.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_json(response).await["detail"].is_string());
        assert_eq!(state.albums.list().await.len(), 6);
    }

    #[rstest]
    #[case::missing_field("image_url", None)]
    #[case::null_field("title", Some(Value::Null))]
    #[case::empty_title("title", Some(json!("")))]
    #[case::negative_price("price", Some(json!(-1)))]
    #[case::relative_url("image_url", Some(json!("cover.png")))]
    #[tokio::test]
    async fn it_should_return_422_and_store_nothing_for_an_invalid_field(
        #[case] field: &str,
        #[case] value: Option<Value>,
    ) {
        let state = seeded_state();
        let mut body = valid_body();
        match value {
            Some(value) => body[field] = value,
            None => {
                body.as_object_mut().unwrap().remove(field);
            }
        }

        let request = post_json(body.to_string());
        let response = app(state.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_json(response).await["detail"].is_string());
        assert_eq!(state.albums.list().await.len(), 6);
    }

    #[tokio::test]
    async fn it_should_ignore_a_client_supplied_id() {
        let mut body = valid_body();
        body["id"] = json!(1);

        let request = post_json(body.to_string());
        let response = app(seeded_state()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["id"], 7);
    }
}
