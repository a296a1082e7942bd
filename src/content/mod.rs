//! Content fetching: query descriptions, the HTTP client, and the shared
//! fetch-and-normalize service every page-level caller goes through.

mod client;
pub mod queries;
mod query;
mod service;

pub use client::{BackendErrors, BackendMessage, ContentClient, ContentError, TokenSource};
pub use query::ContentQuery;
pub use service::ContentService;
