//! Port contracts for the task list.
//!
//! Ports define infrastructure-agnostic interfaces used by the controller.

pub mod menu;
pub mod repository;
pub mod validator;

pub use menu::SidebarMenu;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use validator::{TaskValidationConfig, TaskValidator, ValidationResult};
