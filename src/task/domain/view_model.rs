//! Per-request view model for task list pages.

use super::{TaskCategory, UserTask};
use serde::Serialize;

/// Tasks and categories shown on a list or edit page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListViewModel {
    tasks: Vec<UserTask>,
    categories: Vec<TaskCategory>,
}

impl TaskListViewModel {
    /// Bundles a task collection with the category collection.
    #[must_use]
    pub const fn new(tasks: Vec<UserTask>, categories: Vec<TaskCategory>) -> Self {
        Self { tasks, categories }
    }

    /// Builds a model for a single task, as shown on the edit page.
    #[must_use]
    pub fn single(task: UserTask, categories: Vec<TaskCategory>) -> Self {
        Self::new(vec![task], categories)
    }

    /// Returns the tasks.
    #[must_use]
    pub fn tasks(&self) -> &[UserTask] {
        &self.tasks
    }

    /// Returns the categories.
    #[must_use]
    pub fn categories(&self) -> &[TaskCategory] {
        &self.categories
    }
}
