//! Task list controller.
//!
//! Maps page actions onto the task repository and sidebar menu ports and
//! describes the response as an [`ActionResult`].

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::task::{
    domain::{
        CategoryId, TaskId, TaskListViewModel, UserTask, highlight, route_for_category,
    },
    error::ID_FIELD,
    ports::{
        SidebarMenu, TaskRepository, TaskRepositoryError, TaskValidationConfig, TaskValidator,
    },
    services::response::{ActionResult, FieldErrors, ViewData, ViewResult},
    validation::DefaultTaskValidator,
};

/// Default title of the privacy page.
pub const DEFAULT_PRIVACY_TITLE: &str = "My title Privacy";

/// Controller errors that abort the request instead of producing a response.
#[derive(Debug, Error)]
pub enum TaskControllerError {
    /// The requested category id names no stored category.
    #[error("unknown category id: {0}")]
    UnknownCategory(CategoryId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for controller actions.
pub type TaskControllerResult<T> = Result<T, TaskControllerError>;

/// Controller settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskControllerConfig {
    /// Limits applied to submitted tasks.
    pub validation: TaskValidationConfig,
    /// Title passed to the privacy page.
    pub privacy_title: String,
}

impl Default for TaskControllerConfig {
    fn default() -> Self {
        Self {
            validation: TaskValidationConfig::default(),
            privacy_title: DEFAULT_PRIVACY_TITLE.to_owned(),
        }
    }
}

/// Stateless controller for the task list pages.
///
/// Submitted tasks pass through the validator `V` before reaching the
/// repository.
#[derive(Clone)]
pub struct TaskController<R, M, V = DefaultTaskValidator>
where
    R: TaskRepository,
    M: SidebarMenu,
    V: TaskValidator,
{
    repository: Arc<R>,
    menu: Arc<M>,
    validator: Arc<V>,
    privacy_title: String,
}

impl<R, M> TaskController<R, M>
where
    R: TaskRepository,
    M: SidebarMenu,
{
    /// Creates a controller with default settings.
    #[must_use]
    pub fn new(repository: Arc<R>, menu: Arc<M>) -> Self {
        Self::with_config(repository, menu, TaskControllerConfig::default())
    }

    /// Creates a controller with custom settings.
    #[must_use]
    pub fn with_config(repository: Arc<R>, menu: Arc<M>, config: TaskControllerConfig) -> Self {
        Self::with_validator(
            repository,
            menu,
            Arc::new(DefaultTaskValidator::with_config(config.validation)),
            config.privacy_title,
        )
    }
}

impl<R, M, V> TaskController<R, M, V>
where
    R: TaskRepository,
    M: SidebarMenu,
    V: TaskValidator,
{
    /// Creates a controller using the given validator.
    #[must_use]
    pub fn with_validator(
        repository: Arc<R>,
        menu: Arc<M>,
        validator: Arc<V>,
        privacy_title: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            menu,
            validator,
            privacy_title: privacy_title.into(),
        }
    }

    /// Shows every task.
    ///
    /// The view data carries the sidebar with the "All" entry highlighted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskControllerError::Repository`] when loading fails.
    pub async fn index(&self) -> TaskControllerResult<ActionResult> {
        debug!("listing all tasks");
        let tasks = self.repository.tasks().await?;
        let categories = self.repository.categories().await?;
        let model = TaskListViewModel::new(tasks, categories);
        Ok(ActionResult::View(ViewResult::with_model(
            model,
            self.view_data(CategoryId::ALL),
        )))
    }

    /// Shows the tasks of one category.
    ///
    /// Category `0` redirects to the root page.
    ///
    /// # Errors
    ///
    /// Returns [`TaskControllerError::UnknownCategory`] when `id` names no
    /// stored category, or [`TaskControllerError::Repository`] when loading
    /// fails.
    pub async fn task_by_category(&self, id: CategoryId) -> TaskControllerResult<ActionResult> {
        debug!(category_id = %id, "listing tasks by category");
        if id.is_all() {
            return Ok(ActionResult::redirect_to_root());
        }

        let categories = self.repository.categories().await?;
        let Some(name) = categories
            .iter()
            .find(|category| category.id() == id)
            .map(|category| category.category().to_owned())
        else {
            warn!(category_id = %id, "category lookup found no match");
            return Err(TaskControllerError::UnknownCategory(id));
        };

        let tasks = self
            .repository
            .tasks()
            .await?
            .into_iter()
            .filter(|task| task.category() == name)
            .collect();
        let model = TaskListViewModel::new(tasks, categories);
        Ok(ActionResult::View(ViewResult::with_model(
            model,
            self.view_data(id),
        )))
    }

    /// Stores a submitted task and redirects to its category list.
    ///
    /// A task submitted without a category is filed under `category_name`.
    /// Invalid tasks produce a bad-request and are not stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskControllerError::Repository`] when storing fails.
    pub async fn create(
        &self,
        task: UserTask,
        category_id: CategoryId,
        category_name: &str,
    ) -> TaskControllerResult<ActionResult> {
        debug!(category_id = %category_id, title = task.title(), "creating task");
        let task = if task.has_category() {
            task
        } else {
            task.with_category(category_name)
        };

        if let Err(error) = self.validator.validate(&task) {
            warn!(%error, "rejected new task");
            return Ok(ActionResult::BadRequest(FieldErrors::from(&error)));
        }

        let id = self.repository.add_user_task(&task).await?;
        info!(task_id = %id, category = task.category(), "task created");
        Ok(ActionResult::redirect_after_create(category_id))
    }

    /// Deletes a task and redirects to the list it was deleted from.
    ///
    /// A missing id, or one the repository does not know, produces a
    /// not-found.
    ///
    /// # Errors
    ///
    /// Returns [`TaskControllerError::Repository`] when deletion fails for
    /// any other reason.
    pub async fn delete(
        &self,
        id: Option<TaskId>,
        route_id: CategoryId,
    ) -> TaskControllerResult<ActionResult> {
        let Some(id) = id else {
            debug!("delete requested without task id");
            return Ok(ActionResult::NotFound);
        };

        match self.repository.delete_user_task(id).await {
            Ok(()) => {
                info!(task_id = %id, "task deleted");
                Ok(ActionResult::redirect_to_category(route_id))
            }
            Err(TaskRepositoryError::NotFound(_)) => {
                warn!(task_id = %id, "delete requested for unknown task");
                Ok(ActionResult::NotFound)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Toggles the completion flag of a task and redirects to `route_id`.
    ///
    /// A missing id produces a not-found; an id matching no task produces a
    /// bad-request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskControllerError::Repository`] when the lookup or the
    /// update fails.
    pub async fn change_task_status(
        &self,
        id: Option<TaskId>,
        route_id: CategoryId,
    ) -> TaskControllerResult<ActionResult> {
        let Some(id) = id else {
            debug!("status change requested without task id");
            return Ok(ActionResult::NotFound);
        };

        let exists = self
            .repository
            .tasks()
            .await?
            .iter()
            .any(|task| task.id() == id);
        if !exists {
            warn!(task_id = %id, "status change requested for unknown task");
            return Ok(unknown_task(id));
        }

        let changed = self.repository.change_status_user_task(id).await?;
        info!(task_id = %changed, "task status toggled");
        Ok(ActionResult::redirect_to_category(route_id))
    }

    /// Shows the edit page of a task.
    ///
    /// The model holds the task and the categories; the view data carries
    /// the route id derived from the task's category. A missing id produces
    /// a not-found; an id matching no task produces a bad-request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskControllerError::Repository`] when loading fails.
    pub async fn edit_user_task(&self, id: Option<TaskId>) -> TaskControllerResult<ActionResult> {
        let Some(id) = id else {
            debug!("edit requested without task id");
            return Ok(ActionResult::NotFound);
        };

        let Some(task) = self.repository.get_user_task(id).await? else {
            warn!(task_id = %id, "edit requested for unknown task");
            return Ok(unknown_task(id));
        };

        let route = route_for_category(task.category());
        let categories = self.repository.categories().await?;
        let model = TaskListViewModel::single(task, categories);
        Ok(ActionResult::View(ViewResult::with_model(
            model,
            self.view_data(route).with_current_route(route),
        )))
    }

    /// Saves an edited task and redirects to the list of its category.
    ///
    /// Invalid tasks produce a bad-request. Tasks the repository does not
    /// hold produce a not-found and are never sent to the edit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskControllerError::Repository`] when the lookup or the
    /// save fails for any other reason.
    pub async fn edit_user_task_confirm(
        &self,
        task: &UserTask,
    ) -> TaskControllerResult<ActionResult> {
        debug!(task_id = %task.id(), "saving edited task");
        if let Err(error) = self.validator.validate(task) {
            warn!(task_id = %task.id(), %error, "rejected edited task");
            return Ok(ActionResult::BadRequest(FieldErrors::from(&error)));
        }

        if self.repository.get_user_task(task.id()).await?.is_none() {
            warn!(task_id = %task.id(), "edit submitted for unknown task");
            return Ok(ActionResult::NotFound);
        }

        match self.repository.edit_user_task(task).await {
            Ok(id) => {
                info!(task_id = %id, "task edited");
                Ok(ActionResult::redirect_to_category(route_for_category(
                    task.category(),
                )))
            }
            Err(TaskRepositoryError::NotFound(_)) => {
                warn!(task_id = %task.id(), "edited task vanished before saving");
                Ok(ActionResult::NotFound)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Shows the privacy page.
    #[must_use]
    pub fn privacy(&self) -> ActionResult {
        ActionResult::View(ViewResult::without_model(
            ViewData::new().with_title(self.privacy_title.clone()),
        ))
    }

    fn view_data(&self, current: CategoryId) -> ViewData {
        ViewData::new().with_side_bar_items(highlight(self.menu.items_side_bar(), current))
    }
}

fn unknown_task(id: TaskId) -> ActionResult {
    ActionResult::BadRequest(FieldErrors::single(
        ID_FIELD,
        format!("no task with id {id}"),
    ))
}
