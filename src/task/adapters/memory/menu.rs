//! In-memory sidebar menu.

use crate::task::{domain::ItemSideBar, ports::SidebarMenu};

/// Sidebar menu backed by a fixed list of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemorySidebarMenu {
    items: Vec<ItemSideBar>,
}

impl InMemorySidebarMenu {
    /// Creates a menu with the standard entries.
    #[must_use]
    pub fn new() -> Self {
        Self::with_items(ItemSideBar::defaults())
    }

    /// Creates a menu with custom entries.
    #[must_use]
    pub const fn with_items(items: Vec<ItemSideBar>) -> Self {
        Self { items }
    }
}

impl Default for InMemorySidebarMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarMenu for InMemorySidebarMenu {
    fn items_side_bar(&self) -> Vec<ItemSideBar> {
        self.items.clone()
    }
}
