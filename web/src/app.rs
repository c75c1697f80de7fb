use leptos::*;

use crate::create::CreatePost;
use crate::posts::Posts;
use crate::query::provide_query_client;

/// Application root: one query cache, the form above the list.
#[component]
pub fn App() -> impl IntoView {
    provide_query_client();

    view! {
        <main class="posts-app">
            <CreatePost />
            <Posts />
        </main>
    }
}
