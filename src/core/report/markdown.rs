//! Markdown report generator
//!
//! Renders catalog reports in Markdown with an embedded Mermaid diagram.
//! These reports render well in GitHub, GitLab, and VS Code.

use crate::core::report::{CourseRow, DanglingRow, MermaidGenerator, ReportContext};
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Template data for `templates/catalog_report.md`
#[derive(Template)]
#[template(path = "catalog_report.md")]
struct CatalogReportTemplate<'a> {
    source: &'a str,
    course_count: usize,
    rows: Vec<CourseRow>,
    dangling: Vec<DanglingRow>,
    mermaid: String,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report to a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    pub fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = CatalogReportTemplate {
            source: &ctx.source,
            course_count: ctx.catalog.len(),
            rows: ctx.course_rows(),
            dangling: ctx.dangling_rows(),
            mermaid: MermaidGenerator::generate_catalog(ctx.catalog),
        };
        Ok(template.render()?)
    }

    /// Render the report and write it to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    pub fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}
