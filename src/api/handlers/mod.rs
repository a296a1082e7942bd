use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use fyrre_core::models::*;

use crate::pages::{AuthorsPage, HomePage, PageError, Pages};

// ============================================================
// Error Handling
// ============================================================

/// Map a page failure to a response. Not-found names the entity; anything
/// else is logged in full here and reaches the client only as the generic
/// message.
fn page_error(e: PageError) -> (StatusCode, String) {
    match &e {
        PageError::NotFound(entity) => {
            tracing::debug!("Not found: {}", entity);
            (StatusCode::NOT_FOUND, e.public_message())
        }
        PageError::Failed(source) => {
            tracing::error!("Failed to load content: {}", source);
            (StatusCode::BAD_GATEWAY, e.public_message())
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Pages
// ============================================================

pub async fn home(State(pages): State<Pages>) -> Result<Json<HomePage>, (StatusCode, String)> {
    pages.home().await.map(Json).map_err(page_error)
}

pub async fn get_category(
    State(pages): State<Pages>,
    Path(id): Path<String>,
) -> Result<Json<CategoryPosts>, (StatusCode, String)> {
    pages.category(&id).await.map(Json).map_err(page_error)
}

// ============================================================
// Posts
// ============================================================

pub async fn get_post(
    State(pages): State<Pages>,
    Path(id): Path<String>,
) -> Result<Json<Post>, (StatusCode, String)> {
    pages.post(&id).await.map(Json).map_err(page_error)
}

/// Secondary content: a failed fetch is an empty list, never an error.
pub async fn popular_posts(State(pages): State<Pages>) -> Json<Vec<Post>> {
    Json(pages.popular_slot().await)
}

// ============================================================
// Authors
// ============================================================

pub async fn list_authors(
    State(pages): State<Pages>,
) -> Result<Json<AuthorsPage>, (StatusCode, String)> {
    pages.authors().await.map(Json).map_err(page_error)
}

pub async fn get_author(
    State(pages): State<Pages>,
    Path(id): Path<String>,
) -> Result<Json<AuthorDetail>, (StatusCode, String)> {
    pages.author(&id).await.map(Json).map_err(page_error)
}
