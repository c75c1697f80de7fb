use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub body: String,
}

pub type Db = Arc<RwLock<Vec<Post>>>;

/// Router over an empty store.
pub fn app() -> Router {
    app_with_posts(Vec::new())
}

/// Router over a store seeded with `posts`, kept in the given order.
pub fn app_with_posts(posts: Vec<Post>) -> Router {
    let db: Db = Arc::new(RwLock::new(posts));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_posts(sample_posts())).await
}

/// A few posts so the browser app has something to show on first load.
pub fn sample_posts() -> Vec<Post> {
    [
        ("Getting started", "Run the mock server, then open the app."),
        ("Second post", "Posts are listed in the order they were created."),
        ("Third post", "New posts get the next free id."),
    ]
    .into_iter()
    .zip(1..)
    .map(|((title, body), id)| Post {
        id,
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect()
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let posts = db.read().await;
    tracing::debug!(count = posts.len(), "listing posts");
    Json(posts.clone())
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<CreatePost>,
) -> (StatusCode, Json<Post>) {
    let mut posts = db.write().await;
    let id = next_id(&posts);
    let post = Post {
        id,
        title: input.title,
        body: input.body,
    };
    posts.push(post.clone());
    tracing::info!(id, title = %post.title, "created post");
    (StatusCode::CREATED, Json(post))
}

fn next_id(posts: &[Post]) -> u64 {
    posts.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
}
