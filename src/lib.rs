//! Todo list: categorised to-do items behind a sidebar-driven list view.
//!
//! This crate provides the page controller of a task-management
//! application. Users file tasks under "My Day", "Important" and "Planned",
//! browse them per category or all at once, and create, edit, delete or
//! complete them.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Tasks, categories, sidebar entries and view models
//! - **Ports**: Abstract trait interfaces for task storage, the sidebar
//!   menu and submitted-task validation
//! - **Adapters**: Concrete implementations of ports (in-memory storage)
//!
//! The controller answers each action with an
//! [`task::services::ActionResult`] descriptor; rendering and HTTP hosting
//! are left to the embedding application.
//!
//! # Modules
//!
//! - [`task`]: Task list domain, ports, adapters and controller

pub mod task;
