//! Interactive catalog menu
//!
//! The menu reads choices line by line from any `BufRead` and writes to any
//! `Write`, so the CLI drives it with stdin/stdout and tests with buffers.

use crate::core::display::{format_chain, format_course_details, format_course_list};
use crate::core::models::Catalog;
use crate::core::resolver::resolve_chain;
use crate::debug;
use std::io::{self, BufRead, Write};

/// A menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// List all courses
    ListCourses,
    /// Show one course's details
    SearchCourse,
    /// Show a course's full prerequisite chain
    TraceChain,
    /// Leave the menu
    Exit,
}

impl MenuChoice {
    /// Parse a raw menu entry; surrounding whitespace is ignored
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ListCourses),
            "2" => Some(Self::SearchCourse),
            "3" => Some(Self::TraceChain),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU_TEXT: &str = "\nMenu:\n\
1. List all courses\n\
2. Search for a course\n\
3. View full prerequisite chain\n\
4. Exit\n";

/// Print `message` and read one trimmed line
///
/// # Returns
/// `None` when the input is exhausted
///
/// # Errors
/// Propagates read and write failures
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask the user for the catalog file path
///
/// # Errors
/// Propagates read and write failures
pub fn prompt_for_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    prompt(input, output, "Enter path to course file (i.e., courses.txt): ")
}

/// Run the menu loop until the user exits or input ends
///
/// # Errors
/// Propagates read and write failures
pub fn run_menu<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        write!(output, "{MENU_TEXT}")?;
        let Some(raw) = prompt(input, output, "Select an option: ")? else {
            debug!("Menu input closed; exiting");
            writeln!(output)?;
            return Ok(());
        };

        match MenuChoice::parse(&raw) {
            Some(MenuChoice::ListCourses) => {
                write!(output, "{}", format_course_list(catalog))?;
            }
            Some(MenuChoice::SearchCourse) => {
                let Some(id) = prompt(input, output, "Enter course ID: ")? else {
                    return Ok(());
                };
                write!(output, "\n{}", format_course_details(catalog.get(&id)))?;
            }
            Some(MenuChoice::TraceChain) => {
                let Some(id) = prompt(input, output, "Enter course ID to trace prerequisites: ")?
                else {
                    return Ok(());
                };
                let chain = resolve_chain(catalog, &id);
                write!(output, "{}", format_chain(&id, &chain))?;
            }
            Some(MenuChoice::Exit) => return Ok(()),
            None => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;
    use std::io::Cursor;

    fn sample() -> Catalog {
        [
            Course::new("CSCI200".to_string(), "Data Structures".to_string())
                .with_prerequisites(["CSCI101"]),
            Course::new("CSCI101".to_string(), "Intro to Programming".to_string())
                .with_prerequisites(["CSCI100"]),
            Course::new("CSCI100".to_string(), "Intro to CS".to_string()),
        ]
        .into_iter()
        .collect()
    }

    fn run(script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_menu(&sample(), &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::ListCourses));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_list_then_exit() {
        let output = run("1\n4\n");
        assert!(output.contains("CSCI100: Intro to CS\nCSCI101: Intro to Programming\nCSCI200: Data Structures\n"));
    }

    #[test]
    fn test_search_course() {
        let output = run("2\nCSCI200\n4\n");
        assert!(output.contains("Course ID: CSCI200"));
        assert!(output.contains("- CSCI101"));
    }

    #[test]
    fn test_trace_chain() {
        let output = run("3\nCSCI200\n4\n");
        assert!(output.contains("Prerequisite chain for CSCI200: CSCI101, CSCI100"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let output = run("7\n4\n");
        assert!(output.contains("Invalid choice. Please try again."));
        assert_eq!(output.matches("Select an option: ").count(), 2);
    }

    #[test]
    fn test_eof_exits() {
        let output = run("1\n");
        assert_eq!(output.matches("Select an option: ").count(), 2);
    }

    #[test]
    fn test_prompt_for_path_trims() {
        let mut input = Cursor::new(b"  courses.txt \n".to_vec());
        let mut output = Vec::new();
        let path = prompt_for_path(&mut input, &mut output).unwrap();
        assert_eq!(path.as_deref(), Some("courses.txt"));
    }
}
