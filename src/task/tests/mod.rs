//! Unit tests for the task list module.
//!
//! Controller tests mock both ports with `mockall`; adapter tests run
//! against the in-memory implementations.
