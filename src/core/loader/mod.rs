//! Catalog loading from line-oriented text sources
//!
//! Each non-blank line holds one record: `id, name, prereq1, prereq2, ...`.
//! Later lines win over earlier lines with the same id.

pub mod line_parser;

pub use line_parser::parse_course_line;

use crate::core::error::CatalogError;
use crate::core::models::Catalog;
use crate::{debug, info, warn};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// What to do with a line that cannot be parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Log a warning, record the line in the report and keep loading
    #[default]
    Skip,
    /// Stop loading and return the error
    Abort,
}

impl FromStr for MalformedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            _ => Err(format!("Unknown malformed-line policy: '{s}' (expected skip or abort)")),
        }
    }
}

impl fmt::Display for MalformedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

/// A line rejected under [`MalformedPolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    /// Human-readable reason
    pub reason: String,
    /// Raw line text
    pub content: String,
}

/// Summary of a single load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records parsed and stored (including ones later replaced)
    pub inserted: usize,
    /// Records that replaced an earlier record with the same id
    pub replaced: usize,
    /// Blank lines ignored
    pub blank_lines: usize,
    /// Malformed lines that were skipped
    pub skipped: Vec<SkippedLine>,
}

/// Load a catalog from in-memory text
///
/// # Errors
/// Returns [`CatalogError::MalformedRecord`] for the first bad line when
/// `policy` is [`MalformedPolicy::Abort`]
pub fn load_catalog_from_str(
    content: &str,
    policy: MalformedPolicy,
) -> Result<(Catalog, LoadReport), CatalogError> {
    let mut catalog = Catalog::new();
    let mut report = LoadReport::default();

    for (idx, line) in content.lines().enumerate() {
        let line_number = idx + 1;

        match parse_course_line(line, line_number) {
            Ok(Some(course)) => {
                report.inserted += 1;
                if let Some(previous) = catalog.insert(course) {
                    debug!(
                        "Line {line_number}: replaced earlier record for '{}'",
                        previous.id
                    );
                    report.replaced += 1;
                }
            }
            Ok(None) => report.blank_lines += 1,
            Err(CatalogError::MalformedRecord {
                line,
                reason,
                content,
            }) if policy == MalformedPolicy::Skip => {
                warn!("Skipping malformed line {line}: {reason}");
                report.skipped.push(SkippedLine {
                    line,
                    reason: reason.to_string(),
                    content,
                });
            }
            Err(err) => return Err(err),
        }
    }

    Ok((catalog, report))
}

/// Load a catalog from a file
///
/// # Errors
/// Returns [`CatalogError::SourceUnavailable`] if the file cannot be read, or
/// [`CatalogError::MalformedRecord`] under [`MalformedPolicy::Abort`]
pub fn load_catalog<P: AsRef<Path>>(
    path: P,
    policy: MalformedPolicy,
) -> Result<(Catalog, LoadReport), CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let (catalog, report) = load_catalog_from_str(&content, policy)?;
    info!(
        "Loaded {} courses from {} ({} skipped)",
        catalog.len(),
        path.display(),
        report.skipped.len()
    );
    Ok((catalog, report))
}

/// Load a catalog from a file, degrading to an empty catalog on failure
///
/// # Returns
/// The catalog (empty when loading failed) together with either the load
/// report or the error that caused the fallback
pub fn load_catalog_or_empty<P: AsRef<Path>>(
    path: P,
    policy: MalformedPolicy,
) -> (Catalog, Result<LoadReport, CatalogError>) {
    match load_catalog(path, policy) {
        Ok((catalog, report)) => (catalog, Ok(report)),
        Err(err) => {
            warn!("{err}; continuing with an empty catalog");
            (Catalog::new(), Err(err))
        }
    }
}
