//! Orchestration around the pure core: the snapshot-owning store,
//! form-boundary validation, and the two-step destructive-action
//! protocol.

mod form;
mod store;

pub use form::{ColumnDraft, TaskSubmission};
pub use store::{BoardStore, ColumnDeletionPlan, TaskDeletionPlan};
