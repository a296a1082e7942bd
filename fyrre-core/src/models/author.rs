use serde::{Deserialize, Serialize};

use super::Post;

/// A contributor. `avatar_url` is always fully qualified and falls back to
/// the placeholder avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    /// Routing key. Falls back to `id` when the backend has no slug.
    pub slug: String,
    pub avatar_url: String,
    pub description: Option<String>,
}

/// An author with the posts they own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorDetail {
    pub author: Author,
    pub posts: Vec<Post>,
}
