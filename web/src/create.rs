//! Post creation form.

use leptos::*;
use posts_core::{ApiError, NewPost, Post};

use crate::api::submit_post;

/// Current contents of the form fields. Never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

impl PostDraft {
    pub fn to_new_post(&self) -> NewPost {
        NewPost::new(self.title.clone(), self.body.clone())
    }
}

/// Which of the four exclusive form views to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionView {
    Submitting,
    Failed(String),
    Submitted,
    Editing,
}

impl SubmissionView {
    /// Checked in order: in flight, failed, succeeded, otherwise the form.
    pub fn select(pending: bool, outcome: Option<&Result<Post, ApiError>>) -> Self {
        if pending {
            return Self::Submitting;
        }
        match outcome {
            Some(Err(err)) => Self::Failed(err.to_string()),
            Some(Ok(_)) => Self::Submitted,
            None => Self::Editing,
        }
    }

    /// The line shown in place of the inputs; `None` means show the inputs.
    pub fn status_text(&self) -> Option<String> {
        match self {
            Self::Submitting => Some("Submitting...".to_string()),
            Self::Failed(message) => Some(format!("Error: {message}")),
            Self::Submitted => Some("Post submitted!".to_string()),
            Self::Editing => None,
        }
    }
}

/// Two text inputs and a submit button, replaced by a status line once a
/// submission has been dispatched.
///
/// There is no way back to the inputs after success or failure, and the
/// fields are not cleared.
#[component]
pub fn CreatePost() -> impl IntoView {
    let draft = create_rw_signal(PostDraft::default());
    let submit = create_action(|post: &NewPost| submit_post(post.clone()));

    let on_submit = move |_: ev::MouseEvent| {
        submit.dispatch(draft.with_untracked(PostDraft::to_new_post));
    };

    move || {
        let current = submit
            .value()
            .with(|outcome| SubmissionView::select(submit.pending().get(), outcome.as_ref()));
        match current.status_text() {
            Some(text) => view! { <span>{text}</span> }.into_view(),
            None => view! {
                <div>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.title = value);
                        }
                    />
                    <input
                        type="text"
                        placeholder="Body"
                        prop:value=move || draft.with(|d| d.body.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.body = value);
                        }
                    />
                    <button on:click=on_submit>"Submit"</button>
                </div>
            }
            .into_view(),
        }
    }
}
