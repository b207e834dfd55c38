//! Form-boundary validation for task and column input.
//!
//! Blank required fields are rejected here, before an action is ever
//! built; the command processor never sees unvalidated text.

use crate::board::domain::{BoardDomainError, ColumnId, Priority, Task, TaskId};
use crate::board::engine::Action;
use chrono::NaiveDate;

/// Validated input for creating or editing a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSubmission {
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    priority: Priority,
    column_id: ColumnId,
}

impl TaskSubmission {
    /// Creates a submission with the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is
    /// empty after trimming.
    pub fn new(
        title: impl Into<String>,
        priority: Priority,
        column_id: ColumnId,
    ) -> Result<Self, BoardDomainError> {
        let raw_title = title.into();
        let normalized_title = raw_title.trim();
        if normalized_title.is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }

        Ok(Self {
            title: normalized_title.to_owned(),
            description: None,
            due_date: None,
            priority,
            column_id,
        })
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

    /// Builds the create action: a fresh task id, the submission's
    /// column as the task's status, and an `AddTask` targeting it.
    #[must_use]
    pub fn into_create_action(self) -> Action {
        let column_id = self.column_id.clone();
        let task = Task {
            id: TaskId::random(),
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            status_id: self.column_id,
        };
        Action::AddTask { task, column_id }
    }

    /// Builds the edit action for an existing task.
    ///
    /// When the submission keeps the task's column the record is simply
    /// replaced; when the column choice changed, the explicit-edit move
    /// path relocates the task to the end of the chosen column in the
    /// same transition.
    #[must_use]
    pub fn into_edit_action(self, existing: &Task) -> Action {
        let column_changed = existing.status_id != self.column_id;
        let updated_task = Task {
            id: existing.id.clone(),
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            status_id: self.column_id.clone(),
        };

        if column_changed {
            Action::MoveTaskBetweenColumns {
                task_id: existing.id.clone(),
                source_column_id: existing.status_id.clone(),
                destination_column_id: self.column_id,
                updated_task,
            }
        } else {
            Action::UpdateTask { task: updated_task }
        }
    }
}

/// Validated input for creating a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDraft {
    title: String,
}

impl ColumnDraft {
    /// Creates a draft with the required title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyColumnTitle`] when the title is
    /// empty after trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw_title = title.into();
        let normalized_title = raw_title.trim();
        if normalized_title.is_empty() {
            return Err(BoardDomainError::EmptyColumnTitle);
        }

        Ok(Self {
            title: normalized_title.to_owned(),
        })
    }

    /// Builds the create action with a fresh column id.
    #[must_use]
    pub fn into_action(self) -> Action {
        Action::AddColumn {
            id: ColumnId::random(),
            title: self.title,
        }
    }
}
