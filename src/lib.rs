//! Corkboard: a Kanban task tracker core.
//!
//! This crate provides the state-transition engine behind a board of
//! tasks: the entity model, a pure command processor over a closed
//! action vocabulary, the positional-move arithmetic for drag
//! reordering, and the derived-view projections used by board and list
//! presentations.
//!
//! # Architecture
//!
//! Canonical state lives in one immutable snapshot that only the command
//! processor replaces:
//!
//! - **Domain**: pure data definitions and invariant checking
//! - **Engine**: the `(state, action) -> state` machine and reorder
//!   resolver
//! - **View**: read-only projections (search, filter, sort, grouping)
//! - **Services**: the snapshot-owning store and form-boundary
//!   validation
//!
//! Rendering, gesture capture, and prompts are external collaborators;
//! they communicate through the action vocabulary and read the returned
//! snapshots.

pub mod board;
