//! Error types for board domain validation and integrity checking.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or parsing domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The column title is empty after trimming.
    #[error("column title must not be empty")]
    EmptyColumnTitle,

    /// The priority value is unsupported.
    #[error("unknown priority: {0}")]
    UnknownPriority(String),

    /// The sort key value is unsupported.
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    /// The sort direction value is unsupported.
    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),
}

/// Structural invariant violations detected by
/// [`BoardState::verify_integrity`](super::BoardState::verify_integrity).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntegrityError {
    /// The column order references a column id that is not a map key.
    #[error("column order references unknown column: {0}")]
    DanglingOrderEntry(ColumnId),

    /// The column order lists the same column id more than once.
    #[error("column order lists column more than once: {0}")]
    DuplicateOrderEntry(ColumnId),

    /// A column exists in the map but is missing from the column order.
    #[error("column missing from column order: {0}")]
    UnlistedColumn(ColumnId),

    /// A column's task sequence references a task id that is not a map key.
    #[error("column {column} references unknown task: {task}")]
    DanglingTaskRef {
        /// Column holding the dangling reference.
        column: ColumnId,
        /// The unresolved task id.
        task: TaskId,
    },

    /// A column's task sequence lists the same task id more than once.
    #[error("column {column} lists task more than once: {task}")]
    DuplicateTaskEntry {
        /// Column holding the duplicate.
        column: ColumnId,
        /// The duplicated task id.
        task: TaskId,
    },

    /// A task's status names a column that does not exist.
    #[error("task {task} has unknown status column: {column}")]
    UnknownStatusColumn {
        /// The task with the dangling status.
        task: TaskId,
        /// The unresolved column id.
        column: ColumnId,
    },

    /// A task is not a member of its status column's task sequence.
    #[error("task {task} is missing from its status column: {column}")]
    MissingMembership {
        /// The unlisted task.
        task: TaskId,
        /// The status column that should contain it.
        column: ColumnId,
    },

    /// A task appears in the task sequence of a column other than its
    /// status column.
    #[error("task {task} appears in foreign column: {column}")]
    ForeignMembership {
        /// The misplaced task.
        task: TaskId,
        /// The column that wrongly contains it.
        column: ColumnId,
    },
}
