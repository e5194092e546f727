//! Sidebar menu port.

use crate::task::domain::ItemSideBar;

/// Source of the sidebar navigation entries.
#[cfg_attr(test, mockall::automock)]
pub trait SidebarMenu: Send + Sync {
    /// Returns the sidebar entries in display order.
    fn items_side_bar(&self) -> Vec<ItemSideBar>;
}
