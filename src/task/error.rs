//! Validation error types for submitted tasks.
//!
//! Each variant names the task field it belongs to so that callers can
//! report failures per field.

use thiserror::Error;

/// Field key for the task title.
pub const TITLE_FIELD: &str = "title";

/// Field key for the task category.
pub const CATEGORY_FIELD: &str = "category";

/// Field key for the task identifier.
pub const ID_FIELD: &str = "id";

/// Errors that can occur while validating a submitted task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The title is empty or whitespace-only.
    #[error("title is required")]
    EmptyTitle,

    /// The title is shorter than the configured minimum.
    #[error("title has {actual} characters, minimum is {min}")]
    TitleTooShort {
        /// The minimum allowed length.
        min: usize,
        /// The actual length.
        actual: usize,
    },

    /// The title is longer than the configured maximum.
    #[error("title has {actual} characters, maximum is {max}")]
    TitleTooLong {
        /// The maximum allowed length.
        max: usize,
        /// The actual length.
        actual: usize,
    },

    /// The task has no category.
    #[error("category is required")]
    MissingCategory,

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[TaskValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl TaskValidationError {
    /// Combines validation errors into a single error.
    ///
    /// A single error is returned unwrapped. Returns `None` when `errors` is
    /// empty.
    #[must_use]
    pub fn combine(errors: Vec<Self>) -> Option<Self> {
        if errors.len() > 1 {
            return Some(Self::Multiple(errors));
        }
        errors.into_iter().next()
    }

    /// Returns the field key the error belongs to, or `None` for
    /// [`TaskValidationError::Multiple`].
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::EmptyTitle | Self::TitleTooShort { .. } | Self::TitleTooLong { .. } => {
                Some(TITLE_FIELD)
            }
            Self::MissingCategory => Some(CATEGORY_FIELD),
            Self::Multiple(_) => None,
        }
    }

    /// Returns the individual errors, flattening nested
    /// [`TaskValidationError::Multiple`] values.
    #[must_use]
    pub fn flatten(&self) -> Vec<&Self> {
        match self {
            Self::Multiple(errors) => errors.iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
