//! Step definitions for task list behaviour scenarios.

pub mod given;
pub mod when;
pub mod world;
