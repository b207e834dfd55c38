//! Unit tests for the board core.

mod projection_tests;
mod reorder_tests;
