//! Parser for comma-separated catalog lines

use crate::core::error::{CatalogError, MalformedReason};
use crate::core::models::Course;

/// Split a catalog line into trimmed fields
fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

/// Parse a single catalog line of the form `id, name, prereq1, prereq2, ...`
///
/// # Arguments
/// * `line` - Raw line text
/// * `line_number` - 1-based line number, used in error reports
///
/// # Returns
/// `Ok(None)` for a blank line, `Ok(Some(course))` for a valid record
///
/// # Errors
/// Returns [`CatalogError::MalformedRecord`] when the line has fewer than two
/// fields or an empty id
pub fn parse_course_line(line: &str, line_number: usize) -> Result<Option<Course>, CatalogError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let malformed = |reason| CatalogError::MalformedRecord {
        line: line_number,
        reason,
        content: line.to_string(),
    };

    let fields = split_fields(line);
    let (id, name, prereqs) = match fields.as_slice() {
        [id, name, prereqs @ ..] => (*id, *name, prereqs),
        _ => return Err(malformed(MalformedReason::MissingName)),
    };

    if id.is_empty() {
        return Err(malformed(MalformedReason::EmptyId));
    }

    // Trailing or doubled commas leave empty fields behind
    let course = Course::new(id.to_string(), name.to_string())
        .with_prerequisites(prereqs.iter().filter(|p| !p.is_empty()).copied());

    Ok(Some(course))
}
