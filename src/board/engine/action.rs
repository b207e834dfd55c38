//! The command vocabulary: one action per state mutation.

use crate::board::domain::{ColumnId, Priority, SortDirection, SortKey, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A position within a column's canonical task sequence.
///
/// Indices always refer to the canonical [`Column::task_ids`] order, never
/// to a sorted/filtered/searched display sequence. Positions perceived in
/// a derived view must be translated first; see
/// [`canonical_drop_index`](super::canonical_drop_index).
///
/// [`Column::task_ids`]: crate::board::domain::Column::task_ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// The column containing the position.
    pub column_id: ColumnId,
    /// Zero-based index into the canonical task sequence.
    pub index: usize,
}

impl Slot {
    /// Creates a slot from a column id and canonical index.
    #[must_use]
    pub const fn new(column_id: ColumnId, index: usize) -> Self {
        Self { column_id, index }
    }
}

/// A tagged description of a single state mutation request.
///
/// The closed action set is the only mutation entry point; the command
/// processor in [`apply`](super::apply) interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Insert a task and append its id to a column's task sequence.
    AddTask {
        /// The task record to store.
        task: Task,
        /// The column receiving the task.
        column_id: ColumnId,
    },
    /// Replace a stored task record verbatim, including its status.
    UpdateTask {
        /// The replacement record.
        task: Task,
    },
    /// Remove a task from the board.
    DeleteTask {
        /// The task to remove.
        task_id: TaskId,
        /// The column currently containing it.
        column_id: ColumnId,
    },
    /// Reposition a task by drag, within or across columns.
    MoveTask {
        /// Where the task was picked up.
        source: Slot,
        /// Where the task was dropped.
        destination: Slot,
        /// The dragged task.
        task_id: TaskId,
    },
    /// Explicit-edit path: relocate a task to the end of another column
    /// and replace its record in the same transition.
    MoveTaskBetweenColumns {
        /// The task to relocate.
        task_id: TaskId,
        /// The column currently containing it.
        source_column_id: ColumnId,
        /// The column receiving it; the id is appended at the end.
        destination_column_id: ColumnId,
        /// The replacement record.
        updated_task: Task,
    },
    /// Create an empty column and append it to the column order.
    AddColumn {
        /// Identifier for the new column.
        id: ColumnId,
        /// Display title.
        title: String,
    },
    /// Replace a column's title.
    RenameColumn {
        /// The column to rename.
        column_id: ColumnId,
        /// The new title.
        new_title: String,
    },
    /// Remove a column and cascade-delete every task it contains.
    DeleteColumn {
        /// The column to remove.
        column_id: ColumnId,
    },
    /// Replace a column's sort parameters.
    SetColumnSort {
        /// The column to adjust.
        column_id: ColumnId,
        /// The new sort key.
        sort_key: SortKey,
        /// The new sort direction.
        sort_direction: SortDirection,
    },
    /// Replace a column's priority filter.
    SetColumnFilter {
        /// The column to adjust.
        column_id: ColumnId,
        /// The new filter set; `None` clears the filter.
        priorities: Option<Vec<Priority>>,
    },
    /// Reposition a column within the column order.
    MoveColumn {
        /// Current position in the column order.
        source_index: usize,
        /// Target position in the order after removal.
        destination_index: usize,
    },
}

impl Action {
    /// Returns the action's wire tag, used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddTask { .. } => "add_task",
            Self::UpdateTask { .. } => "update_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::MoveTask { .. } => "move_task",
            Self::MoveTaskBetweenColumns { .. } => "move_task_between_columns",
            Self::AddColumn { .. } => "add_column",
            Self::RenameColumn { .. } => "rename_column",
            Self::DeleteColumn { .. } => "delete_column",
            Self::SetColumnSort { .. } => "set_column_sort",
            Self::SetColumnFilter { .. } => "set_column_filter",
            Self::MoveColumn { .. } => "move_column",
        }
    }
}
