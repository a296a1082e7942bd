//! View records produced by the [`Normalizer`](crate::Normalizer).
//!
//! # Core Concepts
//!
//! - [`Post`]: An article with cleaned excerpt, a featured image that is never
//!   absent, and references to its tags, categories and author.
//! - [`Category`]: A node in the category tree. Roots have no parent; children
//!   may be empty.
//! - [`Author`]: A contributor. [`AuthorDetail`] pairs one with the posts they own.
//! - [`Tag`]: A free-form label shared by many posts.
//! - [`MenuItem`]: A node in the primary navigation menu.
//!
//! Every record is an immutable value. Ids are opaque strings from the backend
//! and are what routing collaborators turn into paths.

mod author;
mod category;
mod menu;
mod post;
mod site;

pub use author::*;
pub use category::*;
pub use menu::*;
pub use post::*;
pub use site::*;
