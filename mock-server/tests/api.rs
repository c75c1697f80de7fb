use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_posts, sample_posts, Post};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn list_request() -> Request<String> {
    Request::builder().uri("/posts").body(String::new()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_posts_empty() {
    let resp = app().oneshot(list_request()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert!(posts.is_empty());
}

#[tokio::test]
async fn list_posts_returns_seed_in_order() {
    let resp = app_with_posts(sample_posts()).oneshot(list_request()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    let titles: Vec<String> = posts.into_iter().map(|p| p.title).collect();
    let expected: Vec<String> = sample_posts().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, expected);
}

// --- create ---

#[tokio::test]
async fn create_post_returns_201() {
    let resp = app()
        .oneshot(json_request("POST", "/posts", r#"{"title":"Hello","body":"World"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let post: Post = body_json(resp).await;
    assert_eq!(post.id, 1);
    assert_eq!(post.title, "Hello");
    assert_eq!(post.body, "World");
}

#[tokio::test]
async fn create_post_after_seed_takes_next_id() {
    let resp = app_with_posts(sample_posts())
        .oneshot(json_request("POST", "/posts", r#"{"title":"t","body":"b"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let post: Post = body_json(resp).await;
    assert_eq!(post.id, sample_posts().len() as u64 + 1);
}

#[tokio::test]
async fn create_post_missing_field_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/posts", r#"{"title":"no body"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_post_without_content_type_returns_415() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/posts")
                .body(r#"{"title":"t","body":"b"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/posts")
                .header(http::header::ORIGIN, "http://localhost:8080")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(http::header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

// --- create then list ---

#[tokio::test]
async fn created_posts_are_listed() {
    use tower::Service;

    let mut app = app().into_service();

    for title in ["first", "second"] {
        let body = format!(r#"{{"title":"{title}","body":""}}"#);
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request("POST", "/posts", &body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(list_request())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, 1);
    assert_eq!(posts[0].title, "first");
    assert_eq!(posts[1].id, 2);
    assert_eq!(posts[1].title, "second");
}
