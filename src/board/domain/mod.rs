//! Domain model for the board.
//!
//! Pure data definitions: identifier newtypes, the task and column
//! records, the whole-board snapshot, and the validation and integrity
//! predicates the other layers rely on. No mutating operations live
//! here; every state change goes through the command processor in
//! [`crate::board::engine`].

mod column;
mod error;
mod ids;
mod priority;
mod state;
mod task;

pub use column::{Column, ColumnKind, SortDirection, SortKey};
pub use error::{BoardDomainError, IntegrityError};
pub use ids::{ColumnId, TaskId};
pub use priority::Priority;
pub use state::BoardState;
pub use task::Task;
