//! CLI command handlers for `CoursePlanner`.
//!
//! Each command is implemented in its own submodule.

pub mod catalog;
pub mod config;
pub mod menu;
pub mod report;
