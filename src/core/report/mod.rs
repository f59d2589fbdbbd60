//! Report generation for course catalogs
//!
//! Renders a catalog into a Markdown document with per-course prerequisite
//! chains, dangling references, and a Mermaid prerequisite graph.

pub mod markdown;
pub mod mermaid;

use crate::core::models::Catalog;
use crate::core::resolver::resolve_unique_chain;

pub use markdown::MarkdownReporter;
pub use mermaid::MermaidGenerator;

/// One table row of the course listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRow {
    /// Course id
    pub id: String,
    /// Course name
    pub name: String,
    /// Direct prerequisites, comma-joined, or `-`
    pub prerequisites: String,
    /// Full prerequisite chain without repeats, comma-joined, or `-`
    pub chain: String,
}

/// A prerequisite that has no catalog record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingRow {
    /// Course listing the prerequisite
    pub course: String,
    /// Missing prerequisite id
    pub prerequisite: String,
}

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Catalog being reported
    pub catalog: &'a Catalog,
    /// Where the catalog was loaded from
    pub source: String,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(catalog: &'a Catalog, source: String) -> Self {
        Self { catalog, source }
    }

    /// Course rows sorted by id
    #[must_use]
    pub fn course_rows(&self) -> Vec<CourseRow> {
        self.catalog
            .sorted()
            .into_iter()
            .map(|course| CourseRow {
                id: escape_cell(&course.id),
                name: escape_cell(&course.name),
                prerequisites: escape_cell(&join_or_dash(&course.prerequisites)),
                chain: escape_cell(&join_or_dash(&resolve_unique_chain(
                    self.catalog,
                    &course.id,
                ))),
            })
            .collect()
    }

    /// Dangling prerequisite references
    #[must_use]
    pub fn dangling_rows(&self) -> Vec<DanglingRow> {
        self.catalog
            .dangling_references()
            .into_iter()
            .map(|(course, prerequisite)| DanglingRow {
                course: course.to_string(),
                prerequisite: prerequisite.to_string(),
            })
            .collect()
    }
}

/// Escape a value for a Markdown table cell
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

fn join_or_dash(ids: &[String]) -> String {
    if ids.is_empty() {
        "-".to_string()
    } else {
        ids.join(", ")
    }
}
