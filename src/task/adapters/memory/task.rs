//! In-memory task repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{TaskCategory, TaskId, UserTask},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks are kept in identifier order. Soft-deleted categories are stored
/// but never returned.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, UserTask>,
    categories: Vec<TaskCategory>,
}

impl InMemoryTaskState {
    fn next_id(&self) -> TaskId {
        self.tasks
            .keys()
            .next_back()
            .map_or(TaskId::new(1), |last| last.next())
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the built-in categories and no tasks.
    #[must_use]
    pub fn with_default_categories() -> Self {
        Self::seeded(Vec::new(), TaskCategory::defaults())
    }

    /// Creates a repository holding the given tasks and categories.
    ///
    /// Tasks are stored under their own identifiers; a later task with the
    /// same identifier replaces an earlier one.
    #[must_use]
    pub fn seeded(
        tasks: impl IntoIterator<Item = UserTask>,
        categories: impl IntoIterator<Item = TaskCategory>,
    ) -> Self {
        let state = InMemoryTaskState {
            tasks: tasks.into_iter().map(|task| (task.id(), task)).collect(),
            categories: categories.into_iter().collect(),
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn tasks(&self) -> TaskRepositoryResult<Vec<UserTask>> {
        let state = self.read()?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn categories(&self) -> TaskRepositoryResult<Vec<TaskCategory>> {
        let state = self.read()?;
        Ok(state
            .categories
            .iter()
            .filter(|category| !category.is_deleted())
            .cloned()
            .collect())
    }

    async fn add_user_task(&self, task: &UserTask) -> TaskRepositoryResult<TaskId> {
        let mut state = self.write()?;
        let id = if task.id().is_unassigned() {
            state.next_id()
        } else {
            task.id()
        };
        if state.tasks.contains_key(&id) {
            return Err(TaskRepositoryError::DuplicateTask(id));
        }

        state.tasks.insert(id, task.clone().with_id(id));
        Ok(id)
    }

    async fn delete_user_task(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    async fn change_status_user_task(&self, id: TaskId) -> TaskRepositoryResult<TaskId> {
        let mut state = self.write()?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.toggle_done();
        Ok(id)
    }

    async fn get_user_task(&self, id: TaskId) -> TaskRepositoryResult<Option<UserTask>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn edit_user_task(&self, task: &UserTask) -> TaskRepositoryResult<TaskId> {
        let mut state = self.write()?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *stored = task.clone();
        Ok(task.id())
    }
}
