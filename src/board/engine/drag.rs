//! The drag collaborator's drop payload.

use super::{Action, Slot};
use crate::board::domain::TaskId;
use serde::{Deserialize, Serialize};

/// A drop reported by the drag system.
///
/// The destination is absent when the item was dropped outside any
/// target; such drops are discarded before they ever reach the command
/// processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropEvent {
    /// A task card was dropped.
    Task {
        /// The dragged task.
        task_id: TaskId,
        /// Where the task was picked up, in canonical index space.
        source: Slot,
        /// Where the task was dropped, if anywhere.
        destination: Option<Slot>,
    },
    /// A column was dropped.
    Column {
        /// The column's position in the column order before the drag.
        source_index: usize,
        /// The position it was dropped at, if anywhere.
        destination_index: Option<usize>,
    },
}

impl DropEvent {
    /// Translates the drop into a move action.
    ///
    /// Returns `None` when the destination is absent; the drop is
    /// discarded without involving the command processor.
    #[must_use]
    pub fn into_action(self) -> Option<Action> {
        match self {
            Self::Task {
                task_id,
                source,
                destination,
            } => destination.map(|dest| Action::MoveTask {
                source,
                destination: dest,
                task_id,
            }),
            Self::Column {
                source_index,
                destination_index,
            } => destination_index.map(|dest| Action::MoveColumn {
                source_index,
                destination_index: dest,
            }),
        }
    }
}
