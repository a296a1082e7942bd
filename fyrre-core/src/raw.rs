//! Raw node shapes as the content backend returns them.
//!
//! Every field is optional. The backend wraps lists in a `{ nodes: [...] }`
//! connection and single relations in a `{ node: {...} }` edge; both wrappers
//! and their contents may be missing or null.

use serde::Deserialize;

/// The `{ nodes: [...] }` list wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Connection<T> {
    pub nodes: Option<Vec<T>>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: None }
    }
}

impl<T> Connection<T> {
    pub fn new(nodes: Vec<T>) -> Self {
        Self { nodes: Some(nodes) }
    }
}

/// Flatten an optional connection. A missing wrapper or a missing `nodes`
/// list reads as empty.
pub fn nodes<T>(connection: Option<Connection<T>>) -> Vec<T> {
    connection.and_then(|c| c.nodes).unwrap_or_default()
}

/// The `{ node: {...} }` single-relation wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: Option<T>,
}

impl<T> Edge<T> {
    pub fn new(node: T) -> Self {
        Self { node: Some(node) }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<Edge<RawMedia>>,
    pub tags: Option<Connection<RawTag>>,
    pub categories: Option<Connection<RawCategory>>,
    pub author: Option<Edge<RawAuthor>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMedia {
    pub source_url: Option<String>,
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTag {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategory {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub children: Option<Connection<RawCategory>>,
    pub posts: Option<Connection<RawPost>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAuthor {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub avatar: Option<RawAvatar>,
    pub description: Option<String>,
    pub posts: Option<Connection<RawPost>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAvatar {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMenuItem {
    pub id: Option<String>,
    pub label: Option<String>,
    pub url: Option<String>,
    pub child_items: Option<Connection<RawMenuItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSiteSettings {
    pub title: Option<String>,
    pub description: Option<String>,
}
