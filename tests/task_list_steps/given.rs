//! Given steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::given;

#[given("the seeded task list")]
fn seeded_task_list(world: &mut TaskListWorld) {
    world.seed();
}
