//! Leptos front-end for the posts service.
//!
//! The app lists posts from the configured API and offers a form to submit a
//! new one. Fetch and submit status is owned by Leptos resources and actions;
//! components here only map that status to markup.

mod api;
mod app;
mod create;
mod posts;
mod query;

pub use api::{api_base_url, fetch_posts, submit_post};
pub use app::App;
pub use create::{CreatePost, PostDraft, SubmissionView};
pub use posts::{PostList, PostListView, Posts, POSTS_QUERY_KEY};
pub use query::{provide_query_client, use_query_client, QueryClient};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <App /> })
}
