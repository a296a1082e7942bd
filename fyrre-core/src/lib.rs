//! View records and normalization for Fyrre magazine content.
//!
//! The backend speaks a GraphQL-style dialect where almost every field may be
//! missing or null. [`raw`] mirrors that shape faithfully; [`Normalizer`] turns
//! it into the strongly shaped records in [`models`] that callers render.

pub mod excerpt;
pub mod models;
pub mod normalize;
pub mod raw;

pub use excerpt::clean_excerpt;
pub use normalize::{NormalizeError, Normalizer};
