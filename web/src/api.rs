//! Browser transport for the posts API.
//!
//! Requests are built and parsed by [`PostsClient`]; this module only moves
//! them over the wire with `gloo-net`. Failures come back as [`ApiError`]
//! unchanged, with no retry.

use gloo_net::http::{Method, RequestBuilder};
use leptos::logging;
use posts_core::{
    ApiError, HttpMethod, HttpRequest, HttpResponse, NewPost, Post, PostsClient,
    DEFAULT_BASE_URL,
};

/// Base URL of the posts API, fixed at build time.
///
/// Set `POSTS_API_URL` when compiling to target something other than the
/// public placeholder service (for example the local mock server).
pub fn api_base_url() -> &'static str {
    option_env!("POSTS_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

fn client() -> PostsClient {
    PostsClient::new(api_base_url())
}

/// `GET /posts`.
pub async fn fetch_posts() -> Result<Vec<Post>, ApiError> {
    let client = client();
    let result = execute(client.build_list_posts())
        .await
        .and_then(|response| client.parse_list_posts(response));
    match &result {
        Ok(posts) => logging::log!("fetched {} posts", posts.len()),
        Err(err) => logging::warn!("fetching posts failed: {err}"),
    }
    result
}

/// `POST /posts`, returning the post as stored by the service.
pub async fn submit_post(post: NewPost) -> Result<Post, ApiError> {
    let client = client();
    let request = client.build_create_post(&post)?;
    let result = execute(request)
        .await
        .and_then(|response| client.parse_create_post(response));
    match &result {
        Ok(created) => logging::log!("submitted post {}", created.id),
        Err(err) => logging::warn!("submitting post failed: {err}"),
    }
    result
}

async fn execute(request: HttpRequest) -> Result<HttpResponse, ApiError> {
    let method = match request.method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
    };
    let mut builder = RequestBuilder::new(&request.path).method(method);
    for (key, value) in &request.headers {
        builder = builder.header(key, value);
    }
    let prepared = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(transport_error)?;

    let response = prepared.send().await.map_err(transport_error)?;
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    Ok(HttpResponse { status, body })
}

fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}
