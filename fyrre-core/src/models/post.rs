use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{CategoryRef, Tag};

/// A published article.
///
/// `featured_image` is always present: when the backend has no media for the
/// post it holds the placeholder image instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub published_at: Option<NaiveDateTime>,
    /// Plain-text excerpt with markup and truncation artifacts removed.
    pub excerpt: String,
    /// Raw markup body. Only detail queries ask for it.
    pub content: Option<String>,
    pub featured_image: Image,
    pub tags: Vec<Tag>,
    pub categories: Vec<CategoryRef>,
    pub author: Option<AuthorRef>,
}

impl Post {
    /// The category shown in the article breadcrumb: the last one listed.
    pub fn primary_category(&self) -> Option<&CategoryRef> {
        self.categories.last()
    }
}

/// An image reference with a fully-qualified URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub alt: String,
    /// True when `url` points at the local placeholder rather than backend media.
    pub placeholder: bool,
}

/// The author line of a post. Only the name is guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub id: Option<String>,
    pub name: String,
    pub slug: Option<String>,
}
