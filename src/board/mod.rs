//! The Kanban board core.
//!
//! Tasks grouped into ordered columns, mutated exclusively through a
//! closed action vocabulary and projected into board and list
//! presentations without touching canonical order. The module is
//! layered:
//!
//! - Entity model and invariants in [`domain`]
//! - Command processor, reorder resolver, and drag contract in
//!   [`engine`]
//! - Display projections in [`view`]
//! - Store and form boundary in [`services`]

pub mod domain;
pub mod engine;
pub mod services;
pub mod view;

#[cfg(test)]
mod tests;
