//! Repository port for task and category persistence.

use crate::task::domain::{TaskCategory, TaskId, UserTask};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task.
    async fn tasks(&self) -> TaskRepositoryResult<Vec<UserTask>>;

    /// Returns every active category.
    async fn categories(&self) -> TaskRepositoryResult<Vec<TaskCategory>>;

    /// Stores a new task and returns its identifier.
    ///
    /// Tasks carrying [`TaskId::UNASSIGNED`] receive a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the identifier is
    /// already taken.
    async fn add_user_task(&self, task: &UserTask) -> TaskRepositoryResult<TaskId>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete_user_task(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Flips the completion flag of a task and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn change_status_user_task(&self, id: TaskId) -> TaskRepositoryResult<TaskId>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn get_user_task(&self, id: TaskId) -> TaskRepositoryResult<Option<UserTask>>;

    /// Replaces a stored task with the submitted version and returns its
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn edit_user_task(&self, task: &UserTask) -> TaskRepositoryResult<TaskId>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
