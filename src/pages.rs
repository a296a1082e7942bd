//! Page-level callers shared by the preview API and the CLI.
//!
//! Each page fetches through [`ContentService`], screens every image against
//! the media allow-list, and reduces failures to two outcomes: a not-found
//! message naming the entity, or one generic failure.

use fyrre_core::models::*;
use serde::Serialize;
use thiserror::Error;

use crate::content::{ContentError, ContentService};
use crate::media::MediaAllowList;

pub const GENERIC_FAILURE: &str = "failed to load content";
pub const CAROUSEL_SLIDES: usize = 3;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{}", GENERIC_FAILURE)]
    Failed(#[from] ContentError),
}

impl PageError {
    /// The text shown to readers. Never carries backend detail.
    pub fn public_message(&self) -> String {
        self.to_string()
    }
}

fn found<T>(entity: &'static str, value: Option<T>) -> Result<T, PageError> {
    value.ok_or(PageError::NotFound(entity))
}

// ============================================================
// Page payloads
// ============================================================

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub layout: SiteLayout,
    pub menu: Vec<MenuItem>,
    pub slides: Vec<Post>,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorsPage {
    pub authors: Vec<Author>,
}

// ============================================================
// Pages
// ============================================================

#[derive(Debug, Clone)]
pub struct Pages {
    content: ContentService,
    media: MediaAllowList,
}

impl Pages {
    pub fn new(content: ContentService, media: MediaAllowList) -> Self {
        Self { content, media }
    }

    pub fn content(&self) -> &ContentService {
        &self.content
    }

    pub async fn home(&self) -> Result<HomePage, PageError> {
        let (layout, menu, posts) = tokio::try_join!(
            self.content.site_layout(),
            self.content.menu_items(),
            self.content.latest_posts(),
        )?;
        let posts = self.screen(posts);
        let slides = posts.iter().take(CAROUSEL_SLIDES).cloned().collect();

        Ok(HomePage {
            layout,
            menu,
            slides,
            posts,
        })
    }

    pub async fn category(&self, id: &str) -> Result<CategoryPosts, PageError> {
        let mut category = found("category", self.content.category_posts(id).await?)?;
        self.media.screen_posts(&mut category.posts, self.content.normalizer());
        Ok(category)
    }

    pub async fn post(&self, id: &str) -> Result<Post, PageError> {
        let mut post = found("post", self.content.post(id).await?)?;
        self.media
            .screen_image(&mut post.featured_image, self.content.normalizer());
        Ok(post)
    }

    pub async fn author(&self, id: &str) -> Result<AuthorDetail, PageError> {
        let mut detail = found("author", self.content.author(id).await?)?;
        self.media
            .screen_avatar(&mut detail.author.avatar_url, self.content.normalizer());
        self.media
            .screen_posts(&mut detail.posts, self.content.normalizer());
        Ok(detail)
    }

    pub async fn authors(&self) -> Result<AuthorsPage, PageError> {
        let mut authors = self.content.authors().await?;
        for author in &mut authors {
            self.media
                .screen_avatar(&mut author.avatar_url, self.content.normalizer());
        }
        Ok(AuthorsPage { authors })
    }

    pub async fn popular(&self, limit: u32) -> Result<Vec<Post>, PageError> {
        let posts = self.content.popular_posts(limit).await?;
        Ok(self.screen(posts))
    }

    /// The popular-posts slot, screened. A failed fetch is an empty list.
    pub async fn popular_slot(&self) -> Vec<Post> {
        let mut slot = self.content.popular_posts_slot();
        self.screen(slot.settled().await)
    }

    fn screen(&self, mut posts: Vec<Post>) -> Vec<Post> {
        self.media.screen_posts(&mut posts, self.content.normalizer());
        posts
    }
}
