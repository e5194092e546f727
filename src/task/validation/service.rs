//! Validation service implementation.

use crate::task::{
    domain::UserTask,
    error::TaskValidationError,
    ports::validator::{TaskValidationConfig, TaskValidator, ValidationResult},
    validation::rules,
};

/// Default implementation of the task validator.
///
/// Applies all rules and reports every failure rather than stopping at the
/// first one.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use mockable::DefaultClock;
/// use todo_list::task::domain::UserTask;
/// use todo_list::task::ports::validator::TaskValidator;
/// use todo_list::task::validation::DefaultTaskValidator;
///
/// let task = UserTask::new("Water the plants", "My Day", Utc::now(), &DefaultClock);
/// let validator = DefaultTaskValidator::new();
/// assert!(validator.validate(&task).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DefaultTaskValidator {
    config: TaskValidationConfig,
}

impl DefaultTaskValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: TaskValidationConfig::default(),
        }
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: TaskValidationConfig) -> Self {
        Self { config }
    }
}

impl Default for DefaultTaskValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskValidator for DefaultTaskValidator {
    fn validate(&self, task: &UserTask) -> ValidationResult<()> {
        let errors: Vec<_> = [
            rules::validate_title_present(task),
            rules::validate_title_length(task, &self.config),
            rules::validate_category_present(task),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        TaskValidationError::combine(errors).map_or(Ok(()), Err)
    }
}
