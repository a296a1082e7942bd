//! The query shapes the magazine uses, and the `data` payloads they return.
//!
//! Every identifier is a bound variable. Bodies are fixed text.

use fyrre_core::raw::*;
use serde::Deserialize;

use super::ContentQuery;

pub const PRIMARY_MENU: &str = "primary";
pub const POPULAR_POSTS_LIMIT: u32 = 3;

const LIST_POSTS: &str = r#"
query ListPosts {
  posts {
    nodes {
      id
      title
      slug
      date
      excerpt
      featuredImage { node { sourceUrl altText } }
      tags { nodes { id name } }
      author { node { id name slug } }
    }
  }
}"#;

const GET_MENU_ITEMS: &str = r#"
query GetMenuItems($menu: ID!) {
  menu(id: $menu, idType: NAME) {
    menuItems {
      nodes {
        id
        label
        url
        childItems { nodes { id label url } }
      }
    }
  }
}"#;

const GET_SITE_LAYOUT: &str = r#"
query GetSiteLayout {
  categories(where: { parent: null }) {
    nodes {
      id
      name
      slug
      children { nodes { id name slug } }
    }
  }
  generalSettings { title description }
}"#;

const GET_CATEGORY_POSTS: &str = r#"
query GetCategoryPosts($id: ID!) {
  category(id: $id) {
    id
    name
    posts {
      nodes {
        id
        title
        slug
        date
        excerpt
        featuredImage { node { sourceUrl altText } }
        tags { nodes { id name } }
      }
    }
  }
}"#;

const GET_POST: &str = r#"
query GetPost($id: ID!) {
  post(id: $id) {
    id
    title
    slug
    date
    content
    excerpt
    featuredImage { node { sourceUrl altText } }
    author { node { id name slug } }
    categories { nodes { id name slug } }
    tags { nodes { id name } }
  }
}"#;

const GET_AUTHOR: &str = r#"
query GetAuthor($id: ID!) {
  user(id: $id) {
    id
    name
    slug
    avatar { url }
    description
    posts {
      nodes {
        id
        title
        slug
        date
        featuredImage { node { sourceUrl } }
        categories { nodes { id name slug } }
      }
    }
  }
}"#;

const LIST_AUTHORS: &str = r#"
query ListAuthors {
  users {
    nodes {
      id
      name
      slug
      avatar { url }
      description
    }
  }
}"#;

const GET_POPULAR_POSTS: &str = r#"
query GetPopularPosts($first: Int!) {
  posts(where: { orderby: { field: COMMENT_COUNT, order: DESC } }, first: $first) {
    nodes {
      id
      title
      slug
      excerpt
      featuredImage { node { sourceUrl altText } }
      author { node { id name slug } }
    }
  }
}"#;

// ============================================================
// Query builders
// ============================================================

pub fn list_posts() -> ContentQuery {
    ContentQuery::new("ListPosts", LIST_POSTS)
}

pub fn menu_items(menu: &str) -> ContentQuery {
    ContentQuery::new("GetMenuItems", GET_MENU_ITEMS).bind("menu", menu)
}

pub fn site_layout() -> ContentQuery {
    ContentQuery::new("GetSiteLayout", GET_SITE_LAYOUT)
}

pub fn category_posts(id: &str) -> ContentQuery {
    ContentQuery::new("GetCategoryPosts", GET_CATEGORY_POSTS).bind("id", id)
}

pub fn post(id: &str) -> ContentQuery {
    ContentQuery::new("GetPost", GET_POST).bind("id", id)
}

pub fn author(id: &str) -> ContentQuery {
    ContentQuery::new("GetAuthor", GET_AUTHOR).bind("id", id)
}

pub fn list_authors() -> ContentQuery {
    ContentQuery::new("ListAuthors", LIST_AUTHORS)
}

pub fn popular_posts(first: u32) -> ContentQuery {
    ContentQuery::new("GetPopularPosts", GET_POPULAR_POSTS).bind("first", first)
}

// ============================================================
// Response payloads
// ============================================================

#[derive(Debug, Deserialize)]
pub struct PostsData {
    pub posts: Option<Connection<RawPost>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuData {
    pub menu: Option<RawMenu>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMenu {
    pub menu_items: Option<Connection<RawMenuItem>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteLayoutData {
    pub categories: Option<Connection<RawCategory>>,
    pub general_settings: Option<RawSiteSettings>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryData {
    pub category: Option<RawCategory>,
}

#[derive(Debug, Deserialize)]
pub struct PostData {
    pub post: Option<RawPost>,
}

#[derive(Debug, Deserialize)]
pub struct UserData {
    pub user: Option<RawAuthor>,
}

#[derive(Debug, Deserialize)]
pub struct UsersData {
    pub users: Option<Connection<RawAuthor>>,
}
