//! The snapshot-owning store: dispatch, drop handling, deletion plans.

use crate::board::domain::{BoardState, ColumnId, ColumnKind, TaskId};
use crate::board::engine::{Action, CommandError, DropEvent, apply};

/// Everything a confirmation prompt needs before a column is deleted.
///
/// Destructive actions follow a two-step protocol: the caller requests a
/// plan, acknowledges it (or refuses, for protected columns), and only
/// then dispatches the actual delete action. The command processor
/// itself deletes unconditionally once dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDeletionPlan {
    /// The column to delete.
    pub column_id: ColumnId,
    /// The column's current title, for prompt text.
    pub title: String,
    /// How many tasks the cascade would delete.
    pub task_count: usize,
    /// Whether policy protects this column (seeded defaults only).
    pub protected: bool,
}

/// Everything a confirmation prompt needs before a task is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDeletionPlan {
    /// The task to delete.
    pub task_id: TaskId,
    /// The column currently containing it, as the delete action needs.
    pub column_id: ColumnId,
    /// The task's current title, for prompt text.
    pub title: String,
}

/// Owner of the current board snapshot.
///
/// The store is the single execution context that writes state: each
/// dispatched action is processed to completion before the next is
/// accepted, in strict dispatch order, and every other component reads
/// immutable snapshots. State is process-resident only; a new store
/// starts from the fixed seed snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardStore {
    state: BoardState,
}

impl BoardStore {
    /// Creates a store holding the fixed seed snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: BoardState::seeded(),
        }
    }

    /// Creates a store holding the given snapshot.
    #[must_use]
    pub const fn from_state(state: BoardState) -> Self {
        Self { state }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    /// Applies an action and installs the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Returns the command processor's [`CommandError`] unchanged; the
    /// current snapshot is left untouched when the action is rejected.
    pub fn dispatch(&mut self, action: &Action) -> Result<(), CommandError> {
        match apply(&self.state, action) {
            Ok(next) => {
                tracing::debug!(action = action.name(), "command applied");
                self.state = next;
                Ok(())
            }
            Err(error) => {
                tracing::warn!(action = action.name(), %error, "command rejected");
                Err(error)
            }
        }
    }

    /// Translates a drop payload and dispatches the resulting move.
    ///
    /// Returns `Ok(false)` when the drop had no destination and was
    /// discarded, `Ok(true)` when a move was applied.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] when the translated move is rejected.
    pub fn handle_drop(&mut self, event: DropEvent) -> Result<bool, CommandError> {
        event
            .into_action()
            .map_or(Ok(false), |action| self.dispatch(&action).map(|()| true))
    }

    /// Prepares the two-step deletion protocol for a column.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownColumn`] when the column does not
    /// exist.
    pub fn plan_column_deletion(
        &self,
        column_id: &ColumnId,
    ) -> Result<ColumnDeletionPlan, CommandError> {
        let column = self
            .state
            .column(column_id)
            .ok_or_else(|| CommandError::UnknownColumn(column_id.clone()))?;
        Ok(ColumnDeletionPlan {
            column_id: column.id.clone(),
            title: column.title.clone(),
            task_count: column.task_ids.len(),
            protected: column.kind == ColumnKind::Default,
        })
    }

    /// Prepares the two-step deletion protocol for a task.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownTask`] when the task does not
    /// exist.
    pub fn plan_task_deletion(&self, task_id: &TaskId) -> Result<TaskDeletionPlan, CommandError> {
        let task = self
            .state
            .task(task_id)
            .ok_or_else(|| CommandError::UnknownTask(task_id.clone()))?;
        Ok(TaskDeletionPlan {
            task_id: task.id.clone(),
            column_id: task.status_id.clone(),
            title: task.title.clone(),
        })
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}
