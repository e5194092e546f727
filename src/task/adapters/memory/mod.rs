//! In-memory adapter implementations.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! tests and demos without a database.

mod menu;
mod task;

pub use menu::InMemorySidebarMenu;
pub use task::InMemoryTaskRepository;
