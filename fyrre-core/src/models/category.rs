use serde::{Deserialize, Serialize};

use super::Post;

/// A category node. The tree is recursive even though the backend only
/// nests one level in practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub children: Vec<Category>,
}

impl Category {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A category as referenced from a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// One category together with its posts, newest first as the backend orders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPosts {
    pub id: String,
    pub name: String,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}
