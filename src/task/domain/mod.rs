//! Domain model for the task list.
//!
//! Tasks, categories, sidebar entries and the list view model. Everything
//! here is free of persistence and request handling concerns.

mod category;
mod error;
mod ids;
mod sidebar;
mod task;
mod view_model;

pub use category::{KnownCategory, TaskCategory, route_for_category};
pub use error::TaskDomainError;
pub use ids::{CategoryId, TaskId};
pub use sidebar::{ALL_ITEMS_NAME, ItemSideBar, highlight};
pub use task::{PersistedUserTaskData, UserTask};
pub use view_model::TaskListViewModel;
