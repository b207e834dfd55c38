//! Per-column display projection: search, filter, sort.

use crate::board::domain::{BoardState, Column, Priority, SortDirection, SortKey, Task};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Computes a column's display sequence from canonical state.
///
/// Pure and recomputed on every read; the canonical task sequence is
/// never touched. The pipeline is: canonical order, then the free-text
/// search (case-insensitive substring over title and description), then
/// the column's priority filter, then the column's view-level sort.
/// Dangling task references are skipped rather than surfaced; the
/// integrity checker reports them separately.
#[must_use]
pub fn project<'state>(
    column: &Column,
    state: &'state BoardState,
    search: &str,
) -> Vec<&'state Task> {
    let mut visible: Vec<&Task> = column
        .task_ids
        .iter()
        .filter_map(|task_id| state.tasks.get(task_id))
        .collect();

    if !search.is_empty() {
        let needle = search.to_lowercase();
        visible.retain(|task| matches_search(task, &needle));
    }

    // An empty filter set behaves like no filter at all.
    if let Some(filter) = column.filter_priorities.as_deref()
        && !filter.is_empty()
    {
        visible.retain(|task| filter.contains(&task.priority));
    }

    sort_tasks(&mut visible, column.sort_key, column.sort_direction);
    visible
}

/// Returns the sort parameters resulting from selecting a sort key.
///
/// Selecting the column's current key flips the direction; selecting a
/// new key resets the direction to descending.
#[must_use]
pub fn toggled_sort(column: &Column, key: SortKey) -> (SortKey, SortDirection) {
    if column.sort_key == key {
        (key, column.sort_direction.flipped())
    } else {
        (key, SortDirection::Desc)
    }
}

/// Returns the sort parameters that clear a column's sort.
#[must_use]
pub const fn cleared_sort() -> (SortKey, SortDirection) {
    (SortKey::None, SortDirection::Asc)
}

/// Returns the filter set resulting from toggling one priority.
///
/// The priority's membership in the current set is flipped; a set
/// emptied by the toggle becomes "no filter".
#[must_use]
pub fn toggled_filter(column: &Column, priority: Priority) -> Option<Vec<Priority>> {
    let mut filters = column.filter_priorities.clone().unwrap_or_default();
    let before = filters.len();
    filters.retain(|candidate| *candidate != priority);
    if filters.len() == before {
        filters.push(priority);
    }
    (!filters.is_empty()).then_some(filters)
}

/// Case-insensitive substring match over title and description. The
/// needle must already be lowercased.
pub(crate) fn matches_search(task: &Task, needle: &str) -> bool {
    task.title.to_lowercase().contains(needle)
        || task
            .description
            .as_deref()
            .is_some_and(|text| text.to_lowercase().contains(needle))
}

/// Stable-sorts a display sequence by the given key and direction.
fn sort_tasks(tasks: &mut [&Task], key: SortKey, direction: SortDirection) {
    match key {
        SortKey::None => {}
        SortKey::Priority => {
            tasks.sort_by(|a, b| directed(a.priority.cmp(&b.priority), direction));
        }
        SortKey::DueDate => {
            tasks.sort_by(|a, b| compare_due_dates(a.due_date, b.due_date, direction));
        }
    }
}

/// Applies the sort direction to a comparison outcome.
pub(crate) const fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Due-date comparison: undated tasks sort after every dated task
/// regardless of direction; the direction only controls the sense among
/// dated tasks.
pub(crate) fn compare_due_dates(
    a: Option<NaiveDate>,
    b: Option<NaiveDate>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(date_a), Some(date_b)) => directed(date_a.cmp(&date_b), direction),
    }
}
