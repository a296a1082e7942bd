use serde::{Deserialize, Serialize};

/// An entry of the primary menu. `url` is passed through as the backend
/// stores it; routing collaborators decide what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub url: String,
    pub children: Vec<MenuItem>,
}
