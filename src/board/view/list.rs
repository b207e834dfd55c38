//! List-view grouping with its own transient sort parameters.

use super::projection::{compare_due_dates, directed, matches_search};
use crate::board::domain::{BoardState, Column, SortDirection, Task};
use serde::{Deserialize, Serialize};

/// Sort key for the list presentation. Unlike the per-column
/// [`SortKey`](crate::board::domain::SortKey) there is no unsorted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListSortKey {
    /// Order by priority rank.
    Priority,
    /// Order by due date; undated tasks always sort last.
    DueDate,
}

/// The list view's transient sort state.
///
/// Owned by the presentation and never persisted into the board state;
/// each column's stored sort and filter parameters are ignored by the
/// list projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSort {
    /// Active sort key.
    pub key: ListSortKey,
    /// Sense of the sort.
    pub direction: SortDirection,
}

impl ListSort {
    /// Returns the sort state resulting from selecting a key: the current
    /// key flips the direction, a new key resets it to descending.
    #[must_use]
    pub const fn toggled(self, key: ListSortKey) -> Self {
        match (self.key, key) {
            (ListSortKey::Priority, ListSortKey::Priority)
            | (ListSortKey::DueDate, ListSortKey::DueDate) => Self {
                key,
                direction: self.direction.flipped(),
            },
            _ => Self {
                key,
                direction: SortDirection::Desc,
            },
        }
    }
}

impl Default for ListSort {
    fn default() -> Self {
        Self {
            key: ListSortKey::Priority,
            direction: SortDirection::Desc,
        }
    }
}

/// One column's worth of the list presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListGroup<'state> {
    /// The column the group belongs to.
    pub column: &'state Column,
    /// Tasks in display order after search and the list sort.
    pub tasks: Vec<&'state Task>,
}

/// Groups tasks by column in column order and applies the list view's
/// search and transient sort.
///
/// Empty groups are kept; whether to render them is a presentation
/// decision.
#[must_use]
pub fn grouped<'state>(
    state: &'state BoardState,
    sort: ListSort,
    search: &str,
) -> Vec<ListGroup<'state>> {
    state
        .column_order
        .iter()
        .filter_map(|column_id| state.columns.get(column_id))
        .map(|column| ListGroup {
            column,
            tasks: group_tasks(column, state, sort, search),
        })
        .collect()
}

fn group_tasks<'state>(
    column: &Column,
    state: &'state BoardState,
    sort: ListSort,
    search: &str,
) -> Vec<&'state Task> {
    let mut tasks: Vec<&Task> = column
        .task_ids
        .iter()
        .filter_map(|task_id| state.tasks.get(task_id))
        .collect();

    if !search.is_empty() {
        let needle = search.to_lowercase();
        tasks.retain(|task| matches_search(task, &needle));
    }

    match sort.key {
        ListSortKey::Priority => {
            tasks.sort_by(|a, b| directed(a.priority.cmp(&b.priority), sort.direction));
        }
        ListSortKey::DueDate => {
            tasks.sort_by(|a, b| compare_due_dates(a.due_date, b.due_date, sort.direction));
        }
    }
    tasks
}
