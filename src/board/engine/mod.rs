//! The command processor and its supporting machinery.
//!
//! A pure state machine: [`apply`] interprets the closed [`Action`]
//! vocabulary over immutable [`BoardState`](crate::board::domain::BoardState)
//! snapshots. The reorder resolver carries the positional-move
//! arithmetic shared by task and column moves, and [`DropEvent`] models
//! the drag collaborator's payload.

mod action;
mod apply;
mod drag;
mod reorder;

pub use action::{Action, Slot};
pub use apply::{CommandError, CommandResult, apply};
pub use drag::DropEvent;
pub use reorder::{ReorderError, canonical_drop_index, canonical_index_of, reorder, transfer};
