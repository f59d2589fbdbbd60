//! Library for `CoursePlanner`
//! Loads a course catalog, looks courses up, and traces prerequisite chains.

pub mod config;
pub mod core;
pub mod logger;

/// Returns the current version of the `CoursePlanner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
