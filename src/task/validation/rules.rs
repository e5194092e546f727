//! Individual validation rule implementations.
//!
//! Each rule is a pure function checking one field of a submitted task.

use crate::task::{
    domain::UserTask, error::TaskValidationError, ports::validator::TaskValidationConfig,
};

/// Validates that the title is not blank.
///
/// # Errors
///
/// Returns `TaskValidationError::EmptyTitle` if the trimmed title is empty.
pub fn validate_title_present(task: &UserTask) -> Result<(), TaskValidationError> {
    if task.title().trim().is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(())
}

/// Validates the title length against the configured bounds.
///
/// Length is counted in characters, not bytes. Blank titles are left to
/// [`validate_title_present`].
///
/// # Errors
///
/// Returns `TaskValidationError::TitleTooShort` or
/// `TaskValidationError::TitleTooLong` when the title is out of bounds.
pub fn validate_title_length(
    task: &UserTask,
    config: &TaskValidationConfig,
) -> Result<(), TaskValidationError> {
    let trimmed = task.title().trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    let actual = trimmed.chars().count();
    if actual < config.min_title_length {
        return Err(TaskValidationError::TitleTooShort {
            min: config.min_title_length,
            actual,
        });
    }
    if actual > config.max_title_length {
        return Err(TaskValidationError::TitleTooLong {
            max: config.max_title_length,
            actual,
        });
    }
    Ok(())
}

/// Validates that the task is filed under a category.
///
/// # Errors
///
/// Returns `TaskValidationError::MissingCategory` if the category is blank.
pub fn validate_category_present(task: &UserTask) -> Result<(), TaskValidationError> {
    if !task.has_category() {
        return Err(TaskValidationError::MissingCategory);
    }
    Ok(())
}
