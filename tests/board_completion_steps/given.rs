//! Given steps for board completion BDD scenarios.

use super::world::{BoardCompletionWorld, run_async};
use eyre::WrapErr;
use hestia::board::services::{CreateTaskRequest, SetTaskStateRequest};
use rstest_bdd_macros::given;

#[given("an empty board")]
fn empty_board(world: &mut BoardCompletionWorld) -> Result<(), eyre::Report> {
    let tasks = world
        .service
        .tasks()
        .wrap_err("read the board in scenario setup")?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected an empty board, found {} tasks", tasks.len()));
    }
    Ok(())
}

#[given(r#"a captured task "{text}" linked to area "{area_id}""#)]
fn captured_task_linked_to_area(
    world: &mut BoardCompletionWorld,
    text: String,
    area_id: String,
) -> Result<(), eyre::Report> {
    run_async(
        world
            .service
            .create_task(CreateTaskRequest::new(text).with_area(area_id)),
    )
    .wrap_err("capture linked task in scenario setup")?;
    Ok(())
}

#[given(r#"a captured task "{text}" with no area"#)]
fn captured_task_with_no_area(
    world: &mut BoardCompletionWorld,
    text: String,
) -> Result<(), eyre::Report> {
    run_async(world.service.create_task(CreateTaskRequest::new(text)))
        .wrap_err("capture unlinked task in scenario setup")?;
    Ok(())
}

#[given(r#"the task "{text}" has been moved to "{state}""#)]
fn task_has_been_moved(
    world: &mut BoardCompletionWorld,
    text: String,
    state: String,
) -> Result<(), eyre::Report> {
    let task = world
        .task_by_text(&text)
        .wrap_err("read the board in scenario setup")?
        .ok_or_else(|| eyre::eyre!("no task on the board with text {text:?}"))?;

    run_async(
        world
            .service
            .set_task_state(SetTaskStateRequest::new(task.id().as_str(), state)),
    )
    .wrap_err("move task in scenario setup")?;
    Ok(())
}
