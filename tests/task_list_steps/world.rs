//! Shared world state for task list BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use todo_list::task::{
    adapters::memory::{InMemorySidebarMenu, InMemoryTaskRepository},
    domain::TaskCategory,
    services::{ActionResult, TaskController, TaskControllerError},
};

use crate::test_helpers::seed_tasks;

/// Controller type used by the BDD world.
pub type TestController = TaskController<InMemoryTaskRepository, InMemorySidebarMenu>;

/// Scenario world for task list behaviour tests.
pub struct TaskListWorld {
    /// Controller the steps act on.
    pub controller: TestController,
    /// Outcome of the most recent action.
    pub last_result: Option<Result<ActionResult, TaskControllerError>>,
}

impl TaskListWorld {
    /// Creates a world over an empty repository with the built-in
    /// categories.
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: controller_over(InMemoryTaskRepository::with_default_categories()),
            last_result: None,
        }
    }

    /// Replaces the controller with one over the six seed tasks.
    pub fn seed(&mut self) {
        self.controller = controller_over(InMemoryTaskRepository::seeded(
            seed_tasks(),
            TaskCategory::defaults(),
        ));
    }
}

impl Default for TaskListWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn controller_over(repository: InMemoryTaskRepository) -> TestController {
    TaskController::new(Arc::new(repository), Arc::new(InMemorySidebarMenu::new()))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListWorld {
    TaskListWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
