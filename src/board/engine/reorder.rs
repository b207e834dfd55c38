//! Positional-move arithmetic shared by task and column moves.
//!
//! All indices are positions in a canonical sequence. A destination index
//! addresses the sequence *after* the source element has been removed
//! (standard list-move semantics, not insert-before-removal).

use crate::board::domain::{Column, Task, TaskId};
use thiserror::Error;

/// Errors returned for move indices outside the sequence bounds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReorderError {
    /// The source index does not address an element.
    #[error("source index {index} out of range for sequence of length {len}")]
    SourceOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the sequence at the time of the move.
        len: usize,
    },

    /// The destination index is past the valid insertion range.
    #[error("destination index {index} out of range for sequence of length {len}")]
    DestinationOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the sequence receiving the insertion.
        len: usize,
    },
}

/// Moves the element at `source` to `destination` within one sequence.
///
/// The element is removed first; `destination` then addresses the
/// shortened sequence, so both indices must be below the original length.
///
/// # Errors
///
/// Returns [`ReorderError`] when either index is out of range.
pub fn reorder<T: Clone>(
    seq: &[T],
    source: usize,
    destination: usize,
) -> Result<Vec<T>, ReorderError> {
    if source >= seq.len() {
        return Err(ReorderError::SourceOutOfRange {
            index: source,
            len: seq.len(),
        });
    }
    if destination >= seq.len() {
        return Err(ReorderError::DestinationOutOfRange {
            index: destination,
            len: seq.len(),
        });
    }
    let mut items = seq.to_vec();
    let moved = items.remove(source);
    items.insert(destination, moved);
    Ok(items)
}

/// Moves the element at `source` in one sequence to `destination` in
/// another, producing both updated sequences in a single call so the
/// surrounding state transition stays atomic.
///
/// `destination` may equal the destination sequence's length, which
/// appends.
///
/// # Errors
///
/// Returns [`ReorderError`] when either index is out of range.
pub fn transfer<T: Clone>(
    source_seq: &[T],
    destination_seq: &[T],
    source: usize,
    destination: usize,
) -> Result<(Vec<T>, Vec<T>), ReorderError> {
    if source >= source_seq.len() {
        return Err(ReorderError::SourceOutOfRange {
            index: source,
            len: source_seq.len(),
        });
    }
    if destination > destination_seq.len() {
        return Err(ReorderError::DestinationOutOfRange {
            index: destination,
            len: destination_seq.len(),
        });
    }
    let mut source_items = source_seq.to_vec();
    let moved = source_items.remove(source);
    let mut destination_items = destination_seq.to_vec();
    destination_items.insert(destination, moved);
    Ok((source_items, destination_items))
}

/// Returns a task's position in a column's canonical sequence.
#[must_use]
pub fn canonical_index_of(column: &Column, task_id: &TaskId) -> Option<usize> {
    column.task_ids.iter().position(|id| id == task_id)
}

/// Translates a position in a derived display sequence back to a
/// canonical index.
///
/// While a sort, filter, or search is active, the position a user
/// perceives during a drag addresses the *displayed* sequence. Applying
/// that raw index to the canonical sequence silently corrupts ordering,
/// so the displayed item's identity is mapped back instead: a slot
/// occupied by a displayed task resolves to that task's canonical index,
/// and a slot one past the last displayed task resolves to the canonical
/// length (append).
#[must_use]
pub fn canonical_drop_index(column: &Column, displayed: &[&Task], display_index: usize) -> usize {
    displayed
        .get(display_index)
        .and_then(|task| canonical_index_of(column, &task.id))
        .unwrap_or(column.task_ids.len())
}
