//! Columns and their per-column view parameters.

use super::{BoardDomainError, ColumnId, Priority, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// View-level ordering applied on top of the canonical task sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// No reordering; canonical order is preserved.
    None,
    /// Order by priority rank.
    Priority,
    /// Order by due date; undated tasks always sort last.
    DueDate,
}

impl SortKey {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Priority => "priority",
            Self::DueDate => "due_date",
        }
    }
}

impl TryFrom<&str> for SortKey {
    type Error = BoardDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "none" => Ok(Self::None),
            "priority" => Ok(Self::Priority),
            "due_date" => Ok(Self::DueDate),
            _ => Err(BoardDomainError::UnknownSortKey(value.to_owned())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sense of a view-level sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl TryFrom<&str> for SortDirection {
    type Error = BoardDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(BoardDomainError::UnknownSortDirection(value.to_owned())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a column is one of the seeded defaults or user-created.
///
/// Deletion and rename protection policy reads this flag; it is not an
/// invariant of the command processor, which deletes and renames
/// unconditionally once an action is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Seeded at startup; protected from deletion and renaming by policy.
    Default,
    /// Created through the column form; freely editable.
    Custom,
}

/// A named, ordered bucket of tasks with its own view parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique identifier.
    pub id: ColumnId,
    /// Display title.
    pub title: String,
    /// Default or user-created.
    pub kind: ColumnKind,
    /// Canonical task sequence: duplicate-free, order is meaningful
    /// (top-to-bottom rendering order and list grouping order).
    pub task_ids: Vec<TaskId>,
    /// View-level sort key applied on top of the canonical sequence.
    pub sort_key: SortKey,
    /// Sense of the view-level sort.
    pub sort_direction: SortDirection,
    /// Priorities to keep in the projection; `None` means no filter. An
    /// empty set is treated by the projection as no filter.
    pub filter_priorities: Option<Vec<Priority>>,
}

impl Column {
    /// Creates an empty column with the fresh-column view defaults.
    #[must_use]
    pub fn new(id: ColumnId, title: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            id,
            title: title.into(),
            kind,
            task_ids: Vec::new(),
            sort_key: SortKey::None,
            sort_direction: SortDirection::Asc,
            filter_priorities: None,
        }
    }

    /// Returns `true` when the column's task sequence contains the id.
    #[must_use]
    pub fn contains_task(&self, task_id: &TaskId) -> bool {
        self.task_ids.iter().any(|id| id == task_id)
    }
}
