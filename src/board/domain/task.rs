//! The task record.

use super::{ColumnId, Priority, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A unit of work on the board.
///
/// Tasks are plain records: the command processor replaces them wholesale
/// (an update stores the given value verbatim), so fields are public and
/// no internal invariant is enforced here. Title validation happens at the
/// form boundary before a task value is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, immutable after creation.
    pub id: TaskId,
    /// Display title. Non-empty by form-boundary contract.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Optional due date, date-only precision.
    pub due_date: Option<NaiveDate>,
    /// Priority level.
    pub priority: Priority,
    /// Identifier of the column currently containing this task.
    pub status_id: ColumnId,
}

impl Task {
    /// Creates a task with the required fields and no optional metadata.
    #[must_use]
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        priority: Priority,
        status_id: ColumnId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            due_date: None,
            priority,
            status_id,
        }
    }

    /// Sets the description, normalizing blank text to `None`.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let value = description.into();
        let normalized = value.trim();
        self.description = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}
