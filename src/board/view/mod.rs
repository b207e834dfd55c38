//! Derived-view computation over canonical state.
//!
//! Everything here is read-only: the board projection recomputes each
//! column's display sequence from the snapshot plus transient view
//! parameters, and the list grouping does the same per column group with
//! its own sort state. Nothing in this module writes back into
//! [`BoardState`](crate::board::domain::BoardState); view parameter
//! changes travel through the command processor like any other mutation.

mod list;
mod projection;

pub use list::{ListGroup, ListSort, ListSortKey, grouped};
pub use projection::{cleared_sort, project, toggled_filter, toggled_sort};
