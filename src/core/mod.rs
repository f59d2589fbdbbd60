//! Core catalog functionality: models, loading, prerequisite resolution and presentation

pub mod display;
pub mod error;
pub mod loader;
pub mod menu;
pub mod models;
pub mod report;
pub mod resolver;

pub use error::{CatalogError, MalformedReason};
pub use loader::{load_catalog, load_catalog_from_str, load_catalog_or_empty, LoadReport, MalformedPolicy};
pub use models::{Catalog, Course};
pub use resolver::resolve_chain;
