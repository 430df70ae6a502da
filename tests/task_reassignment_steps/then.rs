//! Then steps for task reassignment BDD scenarios.

use super::world::TaskReassignmentWorld;
use hestia::board::{
    domain::{BoardDomainError, TaskState},
    services::BoardServiceError,
};
use rstest_bdd_macros::then;

#[then(r#"the task state is "{state}""#)]
fn task_state_is(world: &TaskReassignmentWorld, state: String) -> Result<(), eyre::Report> {
    let expected_state = TaskState::try_from(state.as_str())
        .map_err(|err| eyre::eyre!("invalid expected state in scenario: {err}"))?;

    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing captured task"))?;

    if task.state() != expected_state {
        return Err(eyre::eyre!(
            "expected state {}, found {}",
            expected_state.as_str(),
            task.state().as_str()
        ));
    }

    Ok(())
}

#[then("the move fails with an unknown state error")]
fn move_fails_with_unknown_state(world: &TaskReassignmentWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;

    if !matches!(result, Err(BoardServiceError::InvalidState(_))) {
        return Err(eyre::eyre!("expected InvalidState error, got {result:?}"));
    }

    Ok(())
}

#[then("the move fails with a missing task error")]
fn move_fails_with_missing_task(world: &TaskReassignmentWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;

    if !matches!(
        result,
        Err(BoardServiceError::Domain(BoardDomainError::TaskNotFound(_)))
    ) {
        return Err(eyre::eyre!("expected TaskNotFound error, got {result:?}"));
    }

    Ok(())
}
