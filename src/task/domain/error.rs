//! Error types for task domain parsing.

use thiserror::Error;

use super::CategoryId;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The category name is not one of the well-known categories.
    #[error("unknown category name: {0}")]
    UnknownCategoryName(String),

    /// The category id is not one of the well-known categories.
    #[error("unknown category id: {0}")]
    UnknownCategoryId(CategoryId),
}
