//! Task validation implementation.
//!
//! Individual rules live in [`rules`]; [`DefaultTaskValidator`] combines
//! them behind the [`crate::task::ports::TaskValidator`] port.

pub mod rules;
pub mod service;

pub use service::DefaultTaskValidator;
