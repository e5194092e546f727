//! Shared fixtures for in-memory task list integration tests.

use std::sync::Arc;

use rstest::fixture;
use todo_list::task::{
    adapters::memory::{InMemorySidebarMenu, InMemoryTaskRepository},
    domain::TaskCategory,
    services::TaskController,
};

use crate::test_helpers::seed_tasks;

/// Controller wired to the in-memory adapters.
pub type InMemoryController = TaskController<InMemoryTaskRepository, InMemorySidebarMenu>;

/// Repository handle and the controller sharing it.
pub struct TaskListHarness {
    /// Repository the controller writes to.
    pub repository: Arc<InMemoryTaskRepository>,
    /// Controller under test.
    pub controller: InMemoryController,
}

/// Provides a controller over a repository seeded with the six tasks.
#[fixture]
pub fn harness() -> TaskListHarness {
    let repository = Arc::new(InMemoryTaskRepository::seeded(
        seed_tasks(),
        TaskCategory::defaults(),
    ));
    let controller =
        TaskController::new(Arc::clone(&repository), Arc::new(InMemorySidebarMenu::new()));
    TaskListHarness {
        repository,
        controller,
    }
}
