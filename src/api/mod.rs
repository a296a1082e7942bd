mod handlers;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::pages::Pages;

pub fn create_router(pages: Pages) -> Router {
    let api = Router::new()
        // Pages
        .route("/home", get(handlers::home))
        .route("/categories/{id}", get(handlers::get_category))
        // Posts (the literal route wins over the id capture)
        .route("/posts/popular", get(handlers::popular_posts))
        .route("/posts/{id}", get(handlers::get_post))
        // Authors
        .route("/authors", get(handlers::list_authors))
        .route("/authors/{id}", get(handlers::get_author))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(pages)
}
