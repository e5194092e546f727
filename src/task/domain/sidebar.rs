//! Sidebar navigation entries.

use super::{CategoryId, KnownCategory};
use serde::{Deserialize, Serialize};

/// Display name of the unfiltered list entry.
pub const ALL_ITEMS_NAME: &str = "All";

/// Navigation entry pointing at a category list or at the full list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSideBar {
    id: CategoryId,
    name: String,
    is_active: bool,
}

impl ItemSideBar {
    /// Creates an inactive entry.
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_active: false,
        }
    }

    /// Returns the standard entries: the three built-in categories followed
    /// by "All".
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        KnownCategory::ALL
            .into_iter()
            .map(|category| Self::new(category.id(), category.name()))
            .chain(std::iter::once(Self::new(CategoryId::ALL, ALL_ITEMS_NAME)))
            .collect()
    }

    /// Returns the route id the entry links to.
    #[must_use]
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` when the entry is highlighted.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Returns the entries with exactly the one matching `current` highlighted.
#[must_use]
pub fn highlight(items: Vec<ItemSideBar>, current: CategoryId) -> Vec<ItemSideBar> {
    items
        .into_iter()
        .map(|mut item| {
            item.is_active = item.id == current;
            item
        })
        .collect()
}
