//! Text formatting for catalog listings, course details and prerequisite chains

use crate::core::models::{Catalog, Course};
use std::fmt::Write;

/// Format every course as `ID: Name`, one per line, sorted by id
#[must_use]
pub fn format_course_list(catalog: &Catalog) -> String {
    let mut output = String::new();
    for course in catalog.sorted() {
        let _ = writeln!(output, "{course}");
    }
    output
}

/// Format the detail view of one course
///
/// # Arguments
/// * `course` - Result of a catalog lookup; `None` renders the not-found message
#[must_use]
pub fn format_course_details(course: Option<&Course>) -> String {
    let Some(course) = course else {
        return "Course not found.\n".to_string();
    };

    let mut output = String::new();
    let _ = writeln!(output, "Course ID: {}", course.id);
    let _ = writeln!(output, "Name: {}", course.name);
    output.push_str("Prerequisites: \n");

    if course.has_prerequisites() {
        for prereq in &course.prerequisites {
            let _ = writeln!(output, "- {prereq}");
        }
    } else {
        output.push_str("None\n");
    }

    output
}

/// Format a resolved prerequisite chain as a comma-joined line
#[must_use]
pub fn format_chain(course_id: &str, chain: &[String]) -> String {
    if chain.is_empty() {
        "No prerequisites or course not found.\n".to_string()
    } else {
        format!("Prerequisite chain for {course_id}: {}\n", chain.join(", "))
    }
}
