use fyrre_core::models::*;
use fyrre_core::raw;
use fyrre_core::Normalizer;

use super::queries::{self, *};
use super::{ContentClient, ContentError};
use crate::widgets::SecondarySlot;

/// The one fetch-and-normalize path for every page-level caller.
///
/// Each operation pairs a query shape with its normalization so the missing
/// field policy is applied the same way everywhere. `Ok(None)` means the
/// requested entity resolved to null: a normal not-found outcome.
#[derive(Debug, Clone)]
pub struct ContentService {
    client: ContentClient,
    normalizer: Normalizer,
}

impl ContentService {
    pub fn new(client: ContentClient, normalizer: Normalizer) -> Self {
        Self { client, normalizer }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// All posts, newest first.
    pub async fn latest_posts(&self) -> Result<Vec<Post>, ContentError> {
        let data: PostsData = self.client.fetch(&queries::list_posts()).await?;
        Ok(self.normalizer.posts(raw::nodes(data.posts))?)
    }

    /// The primary menu. A menu the backend does not know reads as empty.
    pub async fn menu_items(&self) -> Result<Vec<MenuItem>, ContentError> {
        let data: MenuData = self.client.fetch(&queries::menu_items(PRIMARY_MENU)).await?;
        let items = data
            .menu
            .map(|menu| raw::nodes(menu.menu_items))
            .unwrap_or_default();
        Ok(items
            .into_iter()
            .map(|item| self.normalizer.menu_item(item))
            .collect::<Result<_, _>>()?)
    }

    /// Site settings and the root categories for the header.
    pub async fn site_layout(&self) -> Result<SiteLayout, ContentError> {
        let data: SiteLayoutData = self.client.fetch(&queries::site_layout()).await?;
        let categories = raw::nodes(data.categories)
            .into_iter()
            .map(|category| self.normalizer.category(category))
            .collect::<Result<_, _>>()?;
        Ok(SiteLayout {
            site: self.normalizer.site_info(data.general_settings),
            categories,
        })
    }

    pub async fn category_posts(&self, id: &str) -> Result<Option<CategoryPosts>, ContentError> {
        let data: CategoryData = self.client.fetch(&queries::category_posts(id)).await?;
        match data.category {
            Some(category) => Ok(Some(self.normalizer.category_posts(id, category)?)),
            None => {
                tracing::debug!("Category {} not found", id);
                Ok(None)
            }
        }
    }

    pub async fn post(&self, id: &str) -> Result<Option<Post>, ContentError> {
        let data: PostData = self.client.fetch(&queries::post(id)).await?;
        match data.post {
            Some(post) => Ok(Some(self.normalizer.post(post)?)),
            None => {
                tracing::debug!("Post {} not found", id);
                Ok(None)
            }
        }
    }

    pub async fn author(&self, id: &str) -> Result<Option<AuthorDetail>, ContentError> {
        let data: UserData = self.client.fetch(&queries::author(id)).await?;
        match data.user {
            Some(user) => Ok(Some(self.normalizer.author_detail(user)?)),
            None => {
                tracing::debug!("Author {} not found", id);
                Ok(None)
            }
        }
    }

    pub async fn authors(&self) -> Result<Vec<Author>, ContentError> {
        let data: UsersData = self.client.fetch(&queries::list_authors()).await?;
        Ok(raw::nodes(data.users)
            .into_iter()
            .map(|user| self.normalizer.author(user))
            .collect::<Result<_, _>>()?)
    }

    /// Posts with the most comments.
    pub async fn popular_posts(&self, limit: u32) -> Result<Vec<Post>, ContentError> {
        let data: PostsData = self.client.fetch(&queries::popular_posts(limit)).await?;
        Ok(self.normalizer.posts(raw::nodes(data.posts))?)
    }

    /// Mount the "most popular" slot: one fetch of the top posts.
    pub fn popular_posts_slot(&self) -> SecondarySlot<Post> {
        let service = self.clone();
        SecondarySlot::mount("popular posts", async move {
            service.popular_posts(POPULAR_POSTS_LIMIT).await
        })
    }
}
