//! Pure projection of stored tasks into the renderable board shape.

use super::{AreaId, AreaRegistry, Task, TaskState};
use serde::Serialize;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Heading label used for groups whose area identifier is not registered.
pub const UNKNOWN_AREA_LABEL: &str = "Unknown area";

/// Renderable shape of the whole board.
///
/// The view owns its data and carries no reference back to the store; it is
/// recomputed from scratch after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Flat inbox column; never grouped, even for tasks that carry an area.
    pub uncategorized: Vec<Task>,
    /// Queued column with per-area grouping.
    pub todo: BoardColumn,
    /// Active column with per-area grouping.
    pub in_progress: BoardColumn,
    /// Finished column with per-area grouping.
    pub done: BoardColumn,
}

/// One progress column of grouped and ungrouped entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    /// Column entries in render order.
    pub entries: Vec<ColumnEntry>,
}

/// A single renderable column entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnEntry {
    /// Tasks of one area, rendered under a shared heading.
    Group(AreaGroup),
    /// A task without an area link, rendered on its own.
    Ungrouped(Task),
}

/// Tasks of one area within a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaGroup {
    /// Area identifier the group belongs to.
    pub area_id: AreaId,
    /// Heading label; [`UNKNOWN_AREA_LABEL`] when the area is unregistered.
    pub label: String,
    /// Member tasks in snapshot order.
    pub tasks: Vec<Task>,
}

/// Projects tasks into the renderable board shape.
///
/// Within each progress column, area groups appear in the order their first
/// member occurs in the snapshot, not in registry order. Tasks without an
/// area stay inline between groups at their snapshot position. The
/// uncategorized column is always flat.
#[must_use]
pub fn project(tasks: &[Task], registry: &AreaRegistry) -> BoardView {
    BoardView {
        uncategorized: tasks
            .iter()
            .filter(|task| task.state() == TaskState::Uncategorized)
            .cloned()
            .collect(),
        todo: build_column(tasks, registry, TaskState::Todo),
        in_progress: build_column(tasks, registry, TaskState::InProgress),
        done: build_column(tasks, registry, TaskState::Done),
    }
}

fn build_column(tasks: &[Task], registry: &AreaRegistry, state: TaskState) -> BoardColumn {
    let mut entries: Vec<ColumnEntry> = Vec::new();
    let mut group_positions: HashMap<AreaId, usize> = HashMap::new();

    for task in tasks.iter().filter(|task| task.state() == state) {
        let Some(area_id) = task.area_id() else {
            entries.push(ColumnEntry::Ungrouped(task.clone()));
            continue;
        };

        match group_positions.entry(area_id.clone()) {
            Entry::Occupied(slot) => {
                if let Some(ColumnEntry::Group(group)) = entries.get_mut(*slot.get()) {
                    group.tasks.push(task.clone());
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(entries.len());
                entries.push(ColumnEntry::Group(AreaGroup {
                    area_id: area_id.clone(),
                    label: group_label(registry, area_id),
                    tasks: vec![task.clone()],
                }));
            }
        }
    }

    BoardColumn { entries }
}

fn group_label(registry: &AreaRegistry, area_id: &AreaId) -> String {
    registry.find(area_id).map_or_else(
        || UNKNOWN_AREA_LABEL.to_owned(),
        |area| area.name().to_owned(),
    )
}
