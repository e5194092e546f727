//! When steps for task list BDD scenarios.

use super::world::{TaskListWorld, run_async};
use chrono::{Duration, Utc};
use mockable::DefaultClock;
use rstest_bdd_macros::when;
use todo_list::task::domain::{CategoryId, TaskId, UserTask};

#[when("the category {id:u32} page is requested")]
fn category_page_requested(world: &mut TaskListWorld, id: u32) {
    let result = run_async(world.controller.task_by_category(CategoryId::new(id)));
    world.last_result = Some(result);
}

#[when(r#"a task titled "{title}" is created in category {id:u32} "{name}""#)]
fn task_created(world: &mut TaskListWorld, title: String, id: u32, name: String) {
    let task = UserTask::new(title, "", Utc::now() + Duration::days(1), &DefaultClock);
    let result = run_async(
        world
            .controller
            .create(task, CategoryId::new(id), name.as_str()),
    );
    world.last_result = Some(result);
}

#[when("the status of task {id:u32} is toggled from route {route:u32}")]
fn status_toggled(world: &mut TaskListWorld, id: u32, route: u32) {
    let result = run_async(
        world
            .controller
            .change_task_status(Some(TaskId::new(id)), CategoryId::new(route)),
    );
    world.last_result = Some(result);
}

#[when("the edit page of task {id:u32} is requested")]
fn edit_page_requested(world: &mut TaskListWorld, id: u32) {
    let result = run_async(world.controller.edit_user_task(Some(TaskId::new(id))));
    world.last_result = Some(result);
}
