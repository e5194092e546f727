//! Adapters for the task list ports.
//!
//! - [`memory::InMemoryTaskRepository`]: thread-safe in-memory task storage
//! - [`memory::InMemorySidebarMenu`]: fixed sidebar entries

pub mod memory;
