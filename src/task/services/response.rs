//! Result descriptors produced by controller actions.
//!
//! An [`ActionResult`] describes the response without rendering it: a view
//! with its model and view data, a redirect, a not-found or a bad-request
//! carrying per-field errors.

use crate::task::{
    domain::{CategoryId, ItemSideBar, TaskListViewModel},
    error::TaskValidationError,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Status code of a rendered view.
pub const STATUS_OK: u16 = 200;
/// Status code of a redirect.
pub const STATUS_FOUND: u16 = 302;
/// Status code of a bad-request response.
pub const STATUS_BAD_REQUEST: u16 = 400;
/// Status code of a not-found response.
pub const STATUS_NOT_FOUND: u16 = 404;

/// Per-field error messages returned with a bad-request.
///
/// Serialises as a JSON object mapping field keys to message arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error map holding one message.
    #[must_use]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    /// Appends a message for a field.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Returns the messages recorded for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Returns `true` when at least one message is recorded for `field`.
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Returns the number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no errors are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&TaskValidationError> for FieldErrors {
    fn from(error: &TaskValidationError) -> Self {
        let mut errors = Self::new();
        for inner in error.flatten() {
            if let Some(field) = inner.field() {
                errors.push(field, inner.to_string());
            }
        }
        errors
    }
}

/// Auxiliary values passed to a view next to its model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewData {
    #[serde(skip_serializing_if = "Option::is_none")]
    side_bar_items: Option<Vec<ItemSideBar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_route: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl ViewData {
    /// Creates empty view data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sidebar entries.
    #[must_use]
    pub fn with_side_bar_items(mut self, items: Vec<ItemSideBar>) -> Self {
        self.side_bar_items = Some(items);
        self
    }

    /// Sets the route id the page belongs to.
    #[must_use]
    pub fn with_current_route(mut self, route: CategoryId) -> Self {
        self.current_route = Some(route);
        self
    }

    /// Sets the page title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the sidebar entries, if set.
    #[must_use]
    pub fn side_bar_items(&self) -> Option<&[ItemSideBar]> {
        self.side_bar_items.as_deref()
    }

    /// Returns the current route id, if set.
    #[must_use]
    pub const fn current_route(&self) -> Option<CategoryId> {
        self.current_route
    }

    /// Returns the page title, if set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// A view to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewResult {
    model: Option<TaskListViewModel>,
    view_data: ViewData,
}

impl ViewResult {
    /// Creates a view with a model.
    #[must_use]
    pub const fn with_model(model: TaskListViewModel, view_data: ViewData) -> Self {
        Self {
            model: Some(model),
            view_data,
        }
    }

    /// Creates a view without a model.
    #[must_use]
    pub const fn without_model(view_data: ViewData) -> Self {
        Self {
            model: None,
            view_data,
        }
    }

    /// Returns the model, if any.
    #[must_use]
    pub const fn model(&self) -> Option<&TaskListViewModel> {
        self.model.as_ref()
    }

    /// Returns the view data.
    #[must_use]
    pub const fn view_data(&self) -> &ViewData {
        &self.view_data
    }
}

/// Outcome of a controller action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum ActionResult {
    /// Render a view.
    View(ViewResult),
    /// Redirect to a literal url.
    Redirect(String),
    /// The requested identifier was missing or did not resolve.
    NotFound,
    /// The submitted input was invalid.
    BadRequest(FieldErrors),
}

impl ActionResult {
    /// Redirect to the application root.
    #[must_use]
    pub fn redirect_to_root() -> Self {
        Self::Redirect("/".to_owned())
    }

    /// Redirect issued after creating a task.
    ///
    /// The url is relative to the current controller path and has no
    /// `/Home/` prefix, unlike [`ActionResult::redirect_to_category`].
    #[must_use]
    pub fn redirect_after_create(category: CategoryId) -> Self {
        Self::Redirect(format!("TaskByCategory/{category}"))
    }

    /// Redirect to a category list.
    #[must_use]
    pub fn redirect_to_category(category: CategoryId) -> Self {
        Self::Redirect(format!("/Home/TaskByCategory/{category}"))
    }

    /// Returns the HTTP status code the outcome maps to.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::View(_) => STATUS_OK,
            Self::Redirect(_) => STATUS_FOUND,
            Self::NotFound => STATUS_NOT_FOUND,
            Self::BadRequest(_) => STATUS_BAD_REQUEST,
        }
    }

    /// Returns the view, if the outcome renders one.
    #[must_use]
    pub const fn as_view(&self) -> Option<&ViewResult> {
        match self {
            Self::View(view) => Some(view),
            _ => None,
        }
    }

    /// Returns the redirect url, if the outcome is a redirect.
    #[must_use]
    pub fn redirect_url(&self) -> Option<&str> {
        match self {
            Self::Redirect(url) => Some(url),
            _ => None,
        }
    }

    /// Returns the field errors, if the outcome is a bad-request.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::BadRequest(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns `true` for a not-found outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
