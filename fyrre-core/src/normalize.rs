//! Raw node → view record mapping.
//!
//! Only a missing `id` is fatal. Everything else degrades: absent media
//! becomes the placeholder, absent authors become `None`, absent lists become
//! empty and absent text becomes the empty string.

use chrono::{DateTime, NaiveDateTime};
use thiserror::Error;
use url::Url;

use crate::excerpt::clean_excerpt;
use crate::models::*;
use crate::raw::{self, *};

pub const PLACEHOLDER_IMAGE_PATH: &str = "/images/homepage/magazine-cover.jpg";
pub const PLACEHOLDER_AVATAR_PATH: &str = "/images/placeholder-avatar.jpg";
const PLACEHOLDER_ALT: &str = "Placeholder Image";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("{kind} record is missing its id")]
    MissingId { kind: &'static str },
}

/// Maps raw backend nodes into view records.
///
/// Holds the two origins needed to emit fully-qualified image URLs: where
/// backend media lives (for root-relative `sourceUrl`s) and where the site
/// serves its own placeholder assets.
#[derive(Debug, Clone)]
pub struct Normalizer {
    media_origin: Url,
    site_origin: Url,
}

impl Normalizer {
    pub fn new(media_origin: Url, site_origin: Url) -> Self {
        Self {
            media_origin,
            site_origin,
        }
    }

    /// The placeholder featured image, with `alt` falling back to a generic label.
    pub fn placeholder_image(&self, alt: Option<&str>) -> Image {
        Image {
            url: self.site_asset(PLACEHOLDER_IMAGE_PATH),
            alt: non_empty(alt).unwrap_or(PLACEHOLDER_ALT).to_string(),
            placeholder: true,
        }
    }

    pub fn placeholder_avatar_url(&self) -> String {
        self.site_asset(PLACEHOLDER_AVATAR_PATH)
    }

    // ============================================================
    // Posts
    // ============================================================

    pub fn post(&self, raw: RawPost) -> Result<Post, NormalizeError> {
        let id = require_id(raw.id, "post")?;
        let title = raw.title.unwrap_or_default();

        let featured_image = self.featured_image(raw.featured_image, &title);
        let tags = raw::nodes(raw.tags)
            .into_iter()
            .map(tag)
            .collect::<Result<Vec<_>, _>>()?;
        let categories = raw::nodes(raw.categories)
            .into_iter()
            .map(category_ref)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Post {
            id,
            slug: raw.slug.unwrap_or_default(),
            published_at: raw.date.as_deref().and_then(parse_date),
            excerpt: raw.excerpt.as_deref().map(clean_excerpt).unwrap_or_default(),
            content: raw.content,
            featured_image,
            tags,
            categories,
            author: raw.author.and_then(|edge| edge.node).and_then(author_ref),
            title,
        })
    }

    pub fn posts(&self, raws: Vec<RawPost>) -> Result<Vec<Post>, NormalizeError> {
        raws.into_iter().map(|raw| self.post(raw)).collect()
    }

    fn featured_image(&self, edge: Option<Edge<RawMedia>>, title: &str) -> Image {
        let media = edge.and_then(|e| e.node).unwrap_or_default();
        let alt = non_empty(media.alt_text.as_deref()).or(non_empty(Some(title)));

        match media
            .source_url
            .as_deref()
            .and_then(|src| self.qualify(src))
        {
            Some(url) => Image {
                url,
                alt: alt.unwrap_or(PLACEHOLDER_ALT).to_string(),
                placeholder: false,
            },
            None => self.placeholder_image(alt),
        }
    }

    // ============================================================
    // Categories, Authors, Menus
    // ============================================================

    pub fn category(&self, raw: RawCategory) -> Result<Category, NormalizeError> {
        let children = raw::nodes(raw.children)
            .into_iter()
            .map(|child| self.category(child))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Category {
            id: require_id(raw.id, "category")?,
            name: raw.name.unwrap_or_default(),
            slug: raw.slug.unwrap_or_default(),
            children,
        })
    }

    /// A category with its posts. The id is the one the caller asked for when
    /// the backend omits it from the node.
    pub fn category_posts(
        &self,
        requested_id: &str,
        raw: RawCategory,
    ) -> Result<CategoryPosts, NormalizeError> {
        Ok(CategoryPosts {
            id: raw.id.unwrap_or_else(|| requested_id.to_string()),
            name: raw.name.unwrap_or_default(),
            posts: self.posts(raw::nodes(raw.posts))?,
        })
    }

    pub fn author(&self, raw: RawAuthor) -> Result<Author, NormalizeError> {
        let id = require_id(raw.id, "author")?;
        let avatar_url = raw
            .avatar
            .and_then(|a| a.url)
            .as_deref()
            .and_then(|src| self.qualify(src))
            .unwrap_or_else(|| self.placeholder_avatar_url());

        Ok(Author {
            slug: raw
                .slug
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| id.clone()),
            name: raw.name.unwrap_or_default(),
            avatar_url,
            description: raw.description.filter(|d| !d.trim().is_empty()),
            id,
        })
    }

    pub fn author_detail(&self, mut raw: RawAuthor) -> Result<AuthorDetail, NormalizeError> {
        let posts = self.posts(raw::nodes(raw.posts.take()))?;
        Ok(AuthorDetail {
            author: self.author(raw)?,
            posts,
        })
    }

    pub fn menu_item(&self, raw: RawMenuItem) -> Result<MenuItem, NormalizeError> {
        let children = raw::nodes(raw.child_items)
            .into_iter()
            .map(|child| self.menu_item(child))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MenuItem {
            id: require_id(raw.id, "menu item")?,
            label: raw.label.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
            children,
        })
    }

    pub fn site_info(&self, raw: Option<RawSiteSettings>) -> SiteInfo {
        let raw = raw.unwrap_or_default();
        SiteInfo {
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
        }
    }

    // ============================================================
    // URLs
    // ============================================================

    /// Resolve a backend media reference to a fully-qualified http(s) URL.
    pub fn qualify(&self, src: &str) -> Option<String> {
        let src = src.trim();
        if src.is_empty() {
            return None;
        }
        let url = if let Some(rest) = src.strip_prefix("//") {
            Url::parse(&format!("https://{}", rest)).ok()?
        } else if src.starts_with('/') {
            self.media_origin.join(src).ok()?
        } else {
            Url::parse(src).ok()?
        };
        matches!(url.scheme(), "http" | "https").then(|| url.to_string())
    }

    fn site_asset(&self, path: &str) -> String {
        self.site_origin
            .join(path)
            .map(|url| url.to_string())
            .unwrap_or_else(|_| format!("{}{}", self.site_origin.as_str().trim_end_matches('/'), path))
    }
}

fn require_id(id: Option<String>, kind: &'static str) -> Result<String, NormalizeError> {
    id.filter(|id| !id.is_empty())
        .ok_or(NormalizeError::MissingId { kind })
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

fn tag(raw: RawTag) -> Result<Tag, NormalizeError> {
    Ok(Tag {
        id: require_id(raw.id, "tag")?,
        name: raw.name.unwrap_or_default(),
    })
}

fn category_ref(raw: RawCategory) -> Result<CategoryRef, NormalizeError> {
    Ok(CategoryRef {
        id: require_id(raw.id, "category")?,
        name: raw.name.unwrap_or_default(),
        slug: raw.slug.unwrap_or_default(),
    })
}

/// A post's author line. A node without a name is no author line at all.
fn author_ref(raw: RawAuthor) -> Option<AuthorRef> {
    let name = raw.name.filter(|n| !n.trim().is_empty())?;
    Some(AuthorRef {
        id: raw.id,
        name,
        slug: raw.slug,
    })
}

/// Backend dates come without an offset (`2024-03-01T09:30:00`); RFC 3339 is
/// accepted too and reduced to its local wall time.
fn parse_date(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|d| d.naive_local()))
}
