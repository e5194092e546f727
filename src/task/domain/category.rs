//! Task categories and the fixed mapping between category names and route ids.

use super::{CategoryId, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three built-in task categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownCategory {
    /// Tasks planned for today.
    MyDay,
    /// Tasks flagged as important.
    Important,
    /// Tasks scheduled for later.
    Planned,
}

impl KnownCategory {
    /// All built-in categories in route id order.
    pub const ALL: [Self; 3] = [Self::MyDay, Self::Important, Self::Planned];

    /// Returns the display name stored on tasks.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MyDay => "My Day",
            Self::Important => "Important",
            Self::Planned => "Planned",
        }
    }

    /// Returns the fixed route id of the category.
    #[must_use]
    pub const fn id(self) -> CategoryId {
        match self {
            Self::MyDay => CategoryId::new(1),
            Self::Important => CategoryId::new(2),
            Self::Planned => CategoryId::new(3),
        }
    }

    /// Resolves a built-in category from its route id.
    ///
    /// Returns `None` for `0` ("all tasks") and every unknown id.
    #[must_use]
    pub const fn from_id(id: CategoryId) -> Option<Self> {
        match id.value() {
            1 => Some(Self::MyDay),
            2 => Some(Self::Important),
            3 => Some(Self::Planned),
            _ => None,
        }
    }
}

impl TryFrom<&str> for KnownCategory {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|category| category.name() == value.trim())
            .ok_or_else(|| TaskDomainError::UnknownCategoryName(value.to_owned()))
    }
}

impl TryFrom<CategoryId> for KnownCategory {
    type Error = TaskDomainError;

    fn try_from(value: CategoryId) -> Result<Self, Self::Error> {
        Self::from_id(value).ok_or(TaskDomainError::UnknownCategoryId(value))
    }
}

impl fmt::Display for KnownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the list route id for a task category name.
///
/// Names outside the built-in set fall back to the "all tasks" route.
#[must_use]
pub fn route_for_category(name: &str) -> CategoryId {
    KnownCategory::try_from(name).map_or(CategoryId::ALL, KnownCategory::id)
}

/// Stored task category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCategory {
    id: CategoryId,
    category: String,
    is_deleted: bool,
}

impl TaskCategory {
    /// Creates an active category.
    #[must_use]
    pub fn new(id: CategoryId, category: impl Into<String>) -> Self {
        Self {
            id,
            category: category.into(),
            is_deleted: false,
        }
    }

    /// Creates the stored record of a built-in category.
    #[must_use]
    pub fn known(category: KnownCategory) -> Self {
        Self::new(category.id(), category.name())
    }

    /// Returns the stored records of all built-in categories.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        KnownCategory::ALL.into_iter().map(Self::known).collect()
    }

    /// Marks the category as soft-deleted.
    #[must_use]
    pub fn deleted(mut self) -> Self {
        self.is_deleted = true;
        self
    }

    /// Returns the category identifier.
    #[must_use]
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    /// Returns the category display name.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns `true` when the category has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}
