//! The command processor: the sole path through which state changes.

use super::reorder::{ReorderError, reorder, transfer};
use super::{Action, Slot};
use crate::board::domain::{
    BoardState, Column, ColumnId, ColumnKind, Priority, SortDirection, SortKey, Task, TaskId,
};
use thiserror::Error;

/// Errors returned when the command processor rejects an action.
///
/// A rejected action produces no transition: the caller's snapshot is
/// untouched and the error reports why.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The action targets a column id that does not exist.
    #[error("unknown column: {0}")]
    UnknownColumn(ColumnId),

    /// The action targets a task id that does not exist.
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),

    /// A column with the given id already exists.
    #[error("duplicate column id: {0}")]
    DuplicateColumn(ColumnId),

    /// A task with the given id already exists.
    #[error("duplicate task id: {0}")]
    DuplicateTask(TaskId),

    /// A move index is outside the sequence bounds.
    #[error(transparent)]
    OutOfRange(#[from] ReorderError),
}

/// Result type for command processor transitions.
pub type CommandResult = Result<BoardState, CommandError>;

/// Applies an action to a state snapshot, producing the next snapshot.
///
/// Deterministic, total over the action vocabulary, and referentially
/// transparent: no I/O, no clock reads, no mutation of the input. Every
/// transition builds a fresh snapshot; the input and output share no
/// mutable structure.
///
/// # Errors
///
/// Returns [`CommandError`] when the action references an unknown column
/// or task, reuses an existing id, or moves by an out-of-range index. The
/// input snapshot is left untouched in every error case.
pub fn apply(state: &BoardState, action: &Action) -> CommandResult {
    match action {
        Action::AddTask { task, column_id } => add_task(state, task, column_id),
        Action::UpdateTask { task } => update_task(state, task),
        Action::DeleteTask { task_id, column_id } => delete_task(state, task_id, column_id),
        Action::MoveTask {
            source,
            destination,
            task_id,
        } => move_task(state, source, destination, task_id),
        Action::MoveTaskBetweenColumns {
            task_id,
            source_column_id,
            destination_column_id,
            updated_task,
        } => move_task_between_columns(
            state,
            task_id,
            source_column_id,
            destination_column_id,
            updated_task,
        ),
        Action::AddColumn { id, title } => add_column(state, id, title),
        Action::RenameColumn {
            column_id,
            new_title,
        } => rename_column(state, column_id, new_title),
        Action::DeleteColumn { column_id } => delete_column(state, column_id),
        Action::SetColumnSort {
            column_id,
            sort_key,
            sort_direction,
        } => set_column_sort(state, column_id, *sort_key, *sort_direction),
        Action::SetColumnFilter {
            column_id,
            priorities,
        } => set_column_filter(state, column_id, priorities.as_deref()),
        Action::MoveColumn {
            source_index,
            destination_index,
        } => move_column(state, *source_index, *destination_index),
    }
}

/// Looks up a column for reading.
fn column_ref<'state>(
    state: &'state BoardState,
    column_id: &ColumnId,
) -> Result<&'state Column, CommandError> {
    state
        .columns
        .get(column_id)
        .ok_or_else(|| CommandError::UnknownColumn(column_id.clone()))
}

/// Looks up a column for writing in an under-construction snapshot.
fn column_mut<'state>(
    state: &'state mut BoardState,
    column_id: &ColumnId,
) -> Result<&'state mut Column, CommandError> {
    state
        .columns
        .get_mut(column_id)
        .ok_or_else(|| CommandError::UnknownColumn(column_id.clone()))
}

fn add_task(state: &BoardState, task: &Task, column_id: &ColumnId) -> CommandResult {
    if state.is_valid_task_ref(&task.id) {
        return Err(CommandError::DuplicateTask(task.id.clone()));
    }
    column_ref(state, column_id)?;
    let mut next = state.clone();
    column_mut(&mut next, column_id)?.task_ids.push(task.id.clone());
    next.tasks.insert(task.id.clone(), task.clone());
    Ok(next)
}

fn update_task(state: &BoardState, task: &Task) -> CommandResult {
    if !state.is_valid_task_ref(&task.id) {
        return Err(CommandError::UnknownTask(task.id.clone()));
    }
    let mut next = state.clone();
    next.tasks.insert(task.id.clone(), task.clone());
    Ok(next)
}

fn delete_task(state: &BoardState, task_id: &TaskId, column_id: &ColumnId) -> CommandResult {
    if !state.is_valid_task_ref(task_id) {
        return Err(CommandError::UnknownTask(task_id.clone()));
    }
    column_ref(state, column_id)?;
    let mut next = state.clone();
    column_mut(&mut next, column_id)?.task_ids.retain(|id| id != task_id);
    next.tasks.remove(task_id);
    Ok(next)
}

fn move_task(
    state: &BoardState,
    source: &Slot,
    destination: &Slot,
    task_id: &TaskId,
) -> CommandResult {
    if !state.is_valid_task_ref(task_id) {
        return Err(CommandError::UnknownTask(task_id.clone()));
    }
    if source.column_id == destination.column_id {
        // Same column, same index: identity transition.
        if source.index == destination.index {
            return Ok(state.clone());
        }
        let reordered = reorder(
            &column_ref(state, &source.column_id)?.task_ids,
            source.index,
            destination.index,
        )?;
        let mut next = state.clone();
        column_mut(&mut next, &source.column_id)?.task_ids = reordered;
        return Ok(next);
    }

    let (new_source_ids, new_destination_ids) = transfer(
        &column_ref(state, &source.column_id)?.task_ids,
        &column_ref(state, &destination.column_id)?.task_ids,
        source.index,
        destination.index,
    )?;
    let mut next = state.clone();
    column_mut(&mut next, &source.column_id)?.task_ids = new_source_ids;
    column_mut(&mut next, &destination.column_id)?.task_ids = new_destination_ids;
    let task = next
        .tasks
        .get_mut(task_id)
        .ok_or_else(|| CommandError::UnknownTask(task_id.clone()))?;
    task.status_id = destination.column_id.clone();
    Ok(next)
}

fn move_task_between_columns(
    state: &BoardState,
    task_id: &TaskId,
    source_column_id: &ColumnId,
    destination_column_id: &ColumnId,
    updated_task: &Task,
) -> CommandResult {
    if !state.is_valid_task_ref(task_id) {
        return Err(CommandError::UnknownTask(task_id.clone()));
    }
    column_ref(state, source_column_id)?;
    column_ref(state, destination_column_id)?;
    let mut next = state.clone();
    column_mut(&mut next, source_column_id)?.task_ids.retain(|id| id != task_id);
    column_mut(&mut next, destination_column_id)?.task_ids.push(task_id.clone());
    next.tasks.insert(task_id.clone(), updated_task.clone());
    Ok(next)
}

fn add_column(state: &BoardState, id: &ColumnId, title: &str) -> CommandResult {
    if state.is_valid_column_ref(id) {
        return Err(CommandError::DuplicateColumn(id.clone()));
    }
    let mut next = state.clone();
    next.columns
        .insert(id.clone(), Column::new(id.clone(), title, ColumnKind::Custom));
    next.column_order.push(id.clone());
    Ok(next)
}

fn rename_column(state: &BoardState, column_id: &ColumnId, new_title: &str) -> CommandResult {
    column_ref(state, column_id)?;
    let mut next = state.clone();
    column_mut(&mut next, column_id)?.title = new_title.to_owned();
    Ok(next)
}

fn delete_column(state: &BoardState, column_id: &ColumnId) -> CommandResult {
    let mut next = state.clone();
    let column = next
        .columns
        .remove(column_id)
        .ok_or_else(|| CommandError::UnknownColumn(column_id.clone()))?;
    // Cascading delete: contained tasks are not relocated.
    for task_id in &column.task_ids {
        next.tasks.remove(task_id);
    }
    next.column_order.retain(|id| id != column_id);
    Ok(next)
}

fn set_column_sort(
    state: &BoardState,
    column_id: &ColumnId,
    sort_key: SortKey,
    sort_direction: SortDirection,
) -> CommandResult {
    column_ref(state, column_id)?;
    let mut next = state.clone();
    let column = column_mut(&mut next, column_id)?;
    column.sort_key = sort_key;
    column.sort_direction = sort_direction;
    Ok(next)
}

fn set_column_filter(
    state: &BoardState,
    column_id: &ColumnId,
    priorities: Option<&[Priority]>,
) -> CommandResult {
    column_ref(state, column_id)?;
    let mut next = state.clone();
    column_mut(&mut next, column_id)?.filter_priorities = priorities.map(<[Priority]>::to_vec);
    Ok(next)
}

fn move_column(state: &BoardState, source_index: usize, destination_index: usize) -> CommandResult {
    let new_order = reorder(&state.column_order, source_index, destination_index)?;
    let mut next = state.clone();
    next.column_order = new_order;
    Ok(next)
}
