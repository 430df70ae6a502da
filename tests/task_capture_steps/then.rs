//! Then steps for task capture BDD scenarios.

use super::world::{TaskCaptureWorld, run_async};
use eyre::WrapErr;
use hestia::board::{
    domain::{BoardDomainError, Task, TaskState},
    ports::SnapshotStore,
    services::{BoardServiceError, InitialLoad},
};
use rstest_bdd_macros::then;

fn captured_task(world: &TaskCaptureWorld) -> Result<&Task, eyre::Report> {
    match world.last_capture_result.as_ref() {
        Some(Ok(task)) => Ok(task),
        Some(Err(err)) => Err(eyre::eyre!("capture failed in scenario: {err}")),
        None => Err(eyre::eyre!("missing capture result in scenario world")),
    }
}

#[then("the capture succeeds")]
fn capture_succeeds(world: &TaskCaptureWorld) -> Result<(), eyre::Report> {
    captured_task(world).map(|_| ())
}

#[then(r#"the captured task state is "{state}""#)]
fn captured_task_state_is(world: &TaskCaptureWorld, state: String) -> Result<(), eyre::Report> {
    let expected_state = TaskState::try_from(state.as_str())
        .map_err(|err| eyre::eyre!("invalid expected state in scenario: {err}"))?;
    let task = captured_task(world)?;

    if task.state() != expected_state {
        return Err(eyre::eyre!(
            "expected state {}, found {}",
            expected_state.as_str(),
            task.state().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the captured task is linked to area "{area_id}""#)]
fn captured_task_linked_to_area(
    world: &TaskCaptureWorld,
    area_id: String,
) -> Result<(), eyre::Report> {
    let task = captured_task(world)?;
    let linked = task.area_id().map(|id| id.as_str().to_owned());

    if linked.as_deref() != Some(area_id.as_str()) {
        return Err(eyre::eyre!("expected area link {area_id}, found {linked:?}"));
    }
    Ok(())
}

#[then("the capture fails with an empty text error")]
fn capture_fails_with_empty_text(world: &TaskCaptureWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_capture_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing capture result in scenario world"))?;

    if !matches!(
        result,
        Err(BoardServiceError::Domain(BoardDomainError::EmptyTaskText))
    ) {
        return Err(eyre::eyre!("expected EmptyTaskText error, got {result:?}"));
    }
    Ok(())
}

#[then("the board is empty")]
fn board_is_empty(world: &TaskCaptureWorld) -> Result<(), eyre::Report> {
    let tasks = world.service.tasks().wrap_err("read the board")?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected an empty board, found {} tasks", tasks.len()));
    }
    Ok(())
}

#[then("the stored snapshot holds the captured task")]
fn stored_snapshot_holds_captured_task(world: &TaskCaptureWorld) -> Result<(), eyre::Report> {
    let task = captured_task(world)?;
    let stored = run_async(world.gateway.load())
        .wrap_err("read the snapshot gateway")?
        .ok_or_else(|| eyre::eyre!("no snapshot was written"))?;

    if !stored.iter().any(|record| record.id == task.id().as_str()) {
        return Err(eyre::eyre!(
            "captured task {} missing from the stored snapshot",
            task.id()
        ));
    }
    Ok(())
}

#[then("the board is seeded with the starter tasks")]
fn board_is_seeded(world: &TaskCaptureWorld) -> Result<(), eyre::Report> {
    if world.last_initial_load != Some(InitialLoad::Seeded) {
        return Err(eyre::eyre!(
            "expected a seeded board, got {:?}",
            world.last_initial_load
        ));
    }

    let tasks = world.service.tasks().wrap_err("read the board")?;
    if tasks.is_empty() {
        return Err(eyre::eyre!("the starter board should not be empty"));
    }
    if !tasks.iter().all(|task| task.state() == TaskState::Todo) {
        return Err(eyre::eyre!("starter tasks should all be todo"));
    }
    Ok(())
}

#[then("the board is restored from the snapshot")]
fn board_is_restored(world: &TaskCaptureWorld) -> Result<(), eyre::Report> {
    if world.last_initial_load != Some(InitialLoad::Restored) {
        return Err(eyre::eyre!(
            "expected a restored board, got {:?}",
            world.last_initial_load
        ));
    }
    Ok(())
}

#[then(r#"the task "{text}" is in state "{state}""#)]
fn task_is_in_state(
    world: &TaskCaptureWorld,
    text: String,
    state: String,
) -> Result<(), eyre::Report> {
    let expected_state = TaskState::try_from(state.as_str())
        .map_err(|err| eyre::eyre!("invalid expected state in scenario: {err}"))?;
    let task = world
        .task_by_text(&text)
        .wrap_err("read the board")?
        .ok_or_else(|| eyre::eyre!("no task on the board with text {text:?}"))?;

    if task.state() != expected_state {
        return Err(eyre::eyre!(
            "expected state {}, found {}",
            expected_state.as_str(),
            task.state().as_str()
        ));
    }
    Ok(())
}
