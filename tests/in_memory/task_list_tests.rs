//! End-to-end task list flows over the in-memory adapters.

use chrono::{Duration, Utc};
use mockable::DefaultClock;
use rstest::rstest;
use todo_list::task::{
    domain::{CategoryId, TaskId, UserTask},
    ports::TaskRepository,
    services::{ActionResult, TaskControllerError},
};

use super::helpers::{TaskListHarness, harness};

fn listed_titles(result: &ActionResult) -> Vec<String> {
    result
        .as_view()
        .and_then(|view| view.model())
        .map(|model| {
            model
                .tasks()
                .iter()
                .map(|task| task.title().to_owned())
                .collect()
        })
        .unwrap_or_default()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn index_lists_all_six_seed_tasks(harness: TaskListHarness) {
    let result = harness.controller.index().await.expect("index should succeed");

    assert_eq!(listed_titles(&result).len(), 6);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn my_day_lists_exactly_its_two_tasks(harness: TaskListHarness) {
    let result = harness
        .controller
        .task_by_category(CategoryId::new(1))
        .await
        .expect("category page should render");

    assert_eq!(listed_titles(&result), ["Go to the Gym", "Go to the Shop"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_category_is_an_error(harness: TaskListHarness) {
    let result = harness.controller.task_by_category(CategoryId::new(4)).await;

    assert!(matches!(
        result,
        Err(TaskControllerError::UnknownCategory(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_shows_up_in_its_category(harness: TaskListHarness) {
    let task = UserTask::new(
        "Book dentist",
        "",
        Utc::now() + Duration::days(3),
        &DefaultClock,
    );

    let created = harness
        .controller
        .create(task, CategoryId::new(3), "Planned")
        .await
        .expect("create should succeed");
    assert_eq!(created.redirect_url(), Some("TaskByCategory/3"));

    let planned = harness
        .controller
        .task_by_category(CategoryId::new(3))
        .await
        .expect("category page should render");
    assert_eq!(
        listed_titles(&planned),
        ["Buy Laptop", "Repair Smart Watch", "Book dentist"]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_toggle_round_trips(harness: TaskListHarness) {
    for _ in 0..2 {
        let result = harness
            .controller
            .change_task_status(Some(TaskId::new(3)), CategoryId::new(1))
            .await
            .expect("status change should succeed");
        assert_eq!(result.redirect_url(), Some("/Home/TaskByCategory/1"));
    }

    let task = harness
        .repository
        .get_user_task(TaskId::new(3))
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert!(!task.is_done());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_moves_task_between_categories(harness: TaskListHarness) {
    let page = harness
        .controller
        .edit_user_task(Some(TaskId::new(5)))
        .await
        .expect("edit page should render");
    let task = page
        .as_view()
        .and_then(|view| view.model())
        .and_then(|model| model.tasks().first().cloned())
        .expect("edit page should carry the task");
    assert_eq!(
        page.as_view().and_then(|view| view.view_data().current_route()),
        Some(CategoryId::new(3))
    );

    let result = harness
        .controller
        .edit_user_task_confirm(&task.with_category("My Day"))
        .await
        .expect("edit should succeed");
    assert_eq!(result.redirect_url(), Some("/Home/TaskByCategory/1"));

    let my_day = harness
        .controller
        .task_by_category(CategoryId::new(1))
        .await
        .expect("category page should render");
    assert_eq!(
        listed_titles(&my_day),
        ["Go to the Gym", "Go to the Shop", "Buy Laptop"]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_disappears_and_second_delete_is_not_found(harness: TaskListHarness) {
    let first = harness
        .controller
        .delete(Some(TaskId::new(1)), CategoryId::new(2))
        .await
        .expect("delete should succeed");
    assert_eq!(first.redirect_url(), Some("/Home/TaskByCategory/2"));

    let second = harness
        .controller
        .delete(Some(TaskId::new(1)), CategoryId::new(2))
        .await
        .expect("second delete should produce a response");
    assert!(second.is_not_found());

    let index = harness.controller.index().await.expect("index should succeed");
    assert_eq!(listed_titles(&index).len(), 5);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn editing_a_deleted_task_is_not_found(harness: TaskListHarness) {
    let task = harness
        .repository
        .get_user_task(TaskId::new(4))
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    harness
        .controller
        .delete(Some(TaskId::new(4)), CategoryId::new(1))
        .await
        .expect("delete should succeed");

    let result = harness
        .controller
        .edit_user_task_confirm(&task)
        .await
        .expect("edit of a deleted task should produce a response");

    assert!(result.is_not_found());
    let index = harness.controller.index().await.expect("index should succeed");
    assert_eq!(listed_titles(&index).len(), 5);
}
