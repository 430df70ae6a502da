//! Completion arithmetic over board tasks.

use super::{Area, AreaId, AreaRegistry, Task, TaskState};
use serde::Serialize;

/// Returns whether an area is complete.
///
/// An area is complete when at least one task links to it and every linked
/// task is done. An area with no linked tasks is never complete.
#[must_use]
pub fn area_complete(tasks: &[Task], area_id: &AreaId) -> bool {
    let mut linked = tasks
        .iter()
        .filter(|task| task.area_id() == Some(area_id))
        .peekable();
    if linked.peek().is_none() {
        return false;
    }
    linked.all(|task| task.state() == TaskState::Done)
}

/// Returns whether the whole board is complete.
///
/// Only tasks linked to an area participate: tasks without an area never
/// block or grant completion. A board with no linked tasks is not complete.
#[must_use]
pub fn board_complete(tasks: &[Task]) -> bool {
    let mut linked = tasks
        .iter()
        .filter(|task| task.area_id().is_some())
        .peekable();
    if linked.peek().is_none() {
        return false;
    }
    linked.all(|task| task.state() == TaskState::Done)
}

/// Completion tally for one registered area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaCompletion {
    /// Area identifier.
    pub area_id: AreaId,
    /// Area display name.
    pub name: String,
    /// Number of linked tasks that are done.
    pub done: usize,
    /// Total number of linked tasks.
    pub total: usize,
    /// Whether the area is complete.
    pub complete: bool,
}

/// Tallies completion for every registered area in registry order.
#[must_use]
pub fn completion_summary(tasks: &[Task], registry: &AreaRegistry) -> Vec<AreaCompletion> {
    registry
        .areas()
        .iter()
        .map(|area| summarize_area(tasks, area))
        .collect()
}

fn summarize_area(tasks: &[Task], area: &Area) -> AreaCompletion {
    let mut done = 0_usize;
    let mut total = 0_usize;
    for task in tasks {
        if task.area_id() == Some(area.id()) {
            total += 1;
            if task.state() == TaskState::Done {
                done += 1;
            }
        }
    }

    AreaCompletion {
        area_id: area.id().clone(),
        name: area.name().to_owned(),
        done,
        total,
        complete: total > 0 && done == total,
    }
}
