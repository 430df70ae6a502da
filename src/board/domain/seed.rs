//! Starter board seeded when no usable snapshot exists.

use super::{TaskRecord, TaskState};

/// Starter chores as `(task id, area id, description)` rows.
const STARTER_TASKS: [(&str, &str, &str); 9] = [
    ("entrance-task-1", "area-entrance", "Wipe down the entrance floor"),
    ("entrance-task-2", "area-entrance", "Tidy the shoe cupboard"),
    ("entrance-task-3", "area-entrance", "Clean the front door glass"),
    ("hallway-task-1", "area-hallway", "Vacuum the hallway"),
    ("washroom-task-1", "area-washroom", "Scrub the washbasin"),
    ("toilet-task-1", "area-toilet", "Clean the toilet bowl"),
    ("bath-task-1", "area-bath", "Scrub the bathtub"),
    (
        "kitchen-task-1",
        "area-living-kitchen",
        "Wipe the kitchen counters",
    ),
    (
        "living-task-1",
        "area-living-other",
        "Dust the living room shelves",
    ),
];

/// Returns the starter snapshot used when no stored board is available.
///
/// Every reference area receives at least one queued chore, so a freshly
/// seeded board demonstrates area grouping immediately. All starter tasks
/// begin in [`TaskState::Todo`].
#[must_use]
pub fn starter_records() -> Vec<TaskRecord> {
    STARTER_TASKS
        .into_iter()
        .map(|(id, area_id, text)| TaskRecord {
            id: id.to_owned(),
            text: text.to_owned(),
            area_id: Some(area_id.to_owned()),
            state: TaskState::Todo,
        })
        .collect()
}
