//! Seed data shared by integration and behaviour tests.

use chrono::{DateTime, Duration, Utc};
use todo_list::task::domain::{PersistedUserTaskData, TaskId, UserTask};

fn stored(id: u32, title: &str, category: &str, minutes: i64) -> UserTask {
    let base = DateTime::<Utc>::from_timestamp(1_704_099_600, 0).unwrap_or_default();
    let making_date = base + Duration::minutes(minutes);
    UserTask::from_persisted(PersistedUserTaskData {
        id: TaskId::new(id),
        title: title.to_owned(),
        category: category.to_owned(),
        making_date,
        deadline: making_date + Duration::days(2),
        is_done: false,
    })
}

/// Returns the six seed tasks, two per built-in category.
pub fn seed_tasks() -> Vec<UserTask> {
    vec![
        stored(1, "Make Aplication", "Important", 0),
        stored(2, "Make Testing", "Important", 1),
        stored(3, "Go to the Gym", "My Day", 2),
        stored(4, "Go to the Shop", "My Day", 3),
        stored(5, "Buy Laptop", "Planned", 4),
        stored(6, "Repair Smart Watch", "Planned", 5),
    ]
}
