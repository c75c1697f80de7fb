//! Domain DTOs for the posts API.
//!
//! These mirror the mock-server's schema but are defined independently.
//! Unknown fields (the public service also sends `userId`) are ignored.

use serde::{Deserialize, Serialize};

/// A post as returned by the service. The identifier is assigned remotely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Request payload for creating a post. Carries no identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}
