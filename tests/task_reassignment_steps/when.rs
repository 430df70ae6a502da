//! When steps for task reassignment BDD scenarios.

use super::world::{TaskReassignmentWorld, run_async};
use hestia::board::services::SetTaskStateRequest;
use rstest_bdd_macros::when;

#[when(r#"the task is moved to "{state}""#)]
fn move_task(world: &mut TaskReassignmentWorld, state: String) -> Result<(), eyre::Report> {
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing captured task in scenario world"))?;

    let result = run_async(
        world
            .service
            .set_task_state(SetTaskStateRequest::new(task.id().as_str(), state)),
    );
    if let Ok(ref moved) = result {
        world.last_created_task = Some(moved.clone());
    }
    world.last_move_result = Some(result);
    Ok(())
}

#[when(r#"a missing task is moved to "{state}""#)]
fn move_missing_task(world: &mut TaskReassignmentWorld, state: String) {
    let result = run_async(
        world
            .service
            .set_task_state(SetTaskStateRequest::new("task-missing", state)),
    );
    world.last_move_result = Some(result);
}
