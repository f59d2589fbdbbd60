//! Data models for `CoursePlanner`

pub mod catalog;
pub mod course;

pub use catalog::Catalog;
pub use course::Course;
