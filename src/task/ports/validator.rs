//! Validator port for submitted tasks.
//!
//! Plays the role of model-binding validation: create and edit actions run
//! every submitted task through a validator before touching the repository.

use crate::task::{domain::UserTask, error::TaskValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, TaskValidationError>;

/// Port for task validation.
///
/// Implementations collect every failing rule before returning, combining
/// them with [`TaskValidationError::combine`].
#[cfg_attr(test, mockall::automock)]
pub trait TaskValidator: Send + Sync {
    /// Validates a submitted task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] if any rule fails.
    fn validate(&self, task: &UserTask) -> ValidationResult<()>;
}

/// Limits applied by task validation.
///
/// # Examples
///
/// ```
/// use todo_list::task::ports::validator::TaskValidationConfig;
///
/// let config = TaskValidationConfig::default();
/// assert_eq!(config.min_title_length, 2);
///
/// let lenient = TaskValidationConfig::lenient();
/// assert_eq!(lenient.min_title_length, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskValidationConfig {
    /// Minimum title length in characters.
    pub min_title_length: usize,
    /// Maximum title length in characters.
    pub max_title_length: usize,
}

impl Default for TaskValidationConfig {
    fn default() -> Self {
        Self {
            min_title_length: 2,
            max_title_length: 100,
        }
    }
}

impl TaskValidationConfig {
    /// Creates a configuration accepting any non-empty title.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            min_title_length: 1,
            ..Default::default()
        }
    }

    /// Creates a configuration with tighter title limits.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            min_title_length: 3,
            max_title_length: 60,
        }
    }
}
