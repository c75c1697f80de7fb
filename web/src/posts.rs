//! Post list: a container that queries the cache and a view that renders the
//! result.

use leptos::*;
use posts_core::{ApiError, Post};

use crate::api::fetch_posts;
use crate::query::use_query_client;

/// Cache key of the post list query.
pub const POSTS_QUERY_KEY: &str = "posts";

/// What the list shows. Priority is loading, then error, then the posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostListView {
    Loading,
    Failed(String),
    Loaded(Vec<Post>),
}

impl PostListView {
    pub fn select(loading: bool, error: Option<&ApiError>, posts: &[Post]) -> Self {
        if loading {
            return Self::Loading;
        }
        if let Some(err) = error {
            return Self::Failed(err.to_string());
        }
        Self::Loaded(posts.to_vec())
    }

    /// Text shown instead of the list, if any.
    pub fn status_text(&self) -> Option<String> {
        match self {
            Self::Loading => Some("Fetching posts...".to_string()),
            Self::Failed(message) => Some(format!("An error occurred: {message}")),
            Self::Loaded(_) => None,
        }
    }

    fn render(self) -> View {
        match self {
            Self::Loaded(posts) => view! {
                <ul>
                    <For each=move || posts.clone() key=|post| post.id let:post>
                        <li>{post.title}</li>
                    </For>
                </ul>
            }
            .into_view(),
            status => view! { <div>{status.status_text()}</div> }.into_view(),
        }
    }
}

/// Queries the post list and hands its status to [`PostList`].
#[component]
pub fn Posts() -> impl IntoView {
    let query = use_query_client().query(POSTS_QUERY_KEY, fetch_posts);

    let loading = Signal::derive(move || query.loading().get() || query.get().is_none());
    let error = Signal::derive(move || query.get().and_then(Result::err));
    let posts = Signal::derive(move || query.get().and_then(Result::ok).unwrap_or_default());

    view! { <PostList loading=loading error=error posts=posts /> }
}

/// Renders loading text, an error message, or the list of post titles.
#[component]
pub fn PostList(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] posts: Signal<Vec<Post>>,
) -> impl IntoView {
    move || {
        let current = error.with(|error| {
            posts.with(|posts| PostListView::select(loading.get(), error.as_ref(), posts))
        });
        current.render()
    }
}
