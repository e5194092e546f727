//! Application services for the task list pages.

mod controller;
pub mod response;

pub use controller::{
    DEFAULT_PRIVACY_TITLE, TaskController, TaskControllerConfig, TaskControllerError,
    TaskControllerResult,
};
pub use response::{ActionResult, FieldErrors, ViewData, ViewResult};
