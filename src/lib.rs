//! Headless-CMS content pipeline for the Fyrre magazine front end.
//!
//! Content is fetched over GraphQL, normalized into view records by
//! [`fyrre_core`], screened against the media allow-list, and served to the
//! page-level callers. The interactive header pieces (navigation menu,
//! carousel, secondary slots) live in [`widgets`].

pub mod api;
pub mod config;
pub mod content;
pub mod media;
pub mod pages;
pub mod widgets;

pub use fyrre_core::models;
