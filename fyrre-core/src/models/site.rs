use serde::{Deserialize, Serialize};

use super::Category;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub title: String,
    pub description: String,
}

/// What the page header needs: site settings and the root categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLayout {
    pub site: SiteInfo,
    pub categories: Vec<Category>,
}
