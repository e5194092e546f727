//! User task record.

use super::TaskId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A to-do item owned by the task repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTask {
    id: TaskId,
    title: String,
    category: String,
    making_date: DateTime<Utc>,
    deadline: DateTime<Utc>,
    is_done: bool,
}

/// Parameter object for reconstructing a stored user task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserTaskData {
    /// Stored task identifier.
    pub id: TaskId,
    /// Stored title.
    pub title: String,
    /// Stored category display name.
    pub category: String,
    /// Stored creation timestamp.
    pub making_date: DateTime<Utc>,
    /// Stored deadline.
    pub deadline: DateTime<Utc>,
    /// Stored completion flag.
    pub is_done: bool,
}

impl UserTask {
    /// Creates a new, not yet stored task stamped with the current time.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        deadline: DateTime<Utc>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskId::UNASSIGNED,
            title: title.into(),
            category: category.into(),
            making_date: clock.utc(),
            deadline,
            is_done: false,
        }
    }

    /// Reconstructs a task from stored data.
    #[must_use]
    pub fn from_persisted(data: PersistedUserTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            category: data.category,
            making_date: data.making_date,
            deadline: data.deadline,
            is_done: data.is_done,
        }
    }

    /// Returns a copy of the task carrying the given identifier.
    #[must_use]
    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = id;
        self
    }

    /// Returns a copy of the task moved to another category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the category display name.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns `true` when the task carries a non-blank category.
    #[must_use]
    pub fn has_category(&self) -> bool {
        !self.category.trim().is_empty()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn making_date(&self) -> DateTime<Utc> {
        self.making_date
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns `true` once the task is completed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.is_done
    }

    /// Flips the completion flag.
    pub const fn toggle_done(&mut self) {
        self.is_done = !self.is_done;
    }
}
