//! Non-interactive catalog commands: list, show, chain

use course_planner::config::Config;
use course_planner::core::display::{format_chain, format_course_details, format_course_list};
use course_planner::core::loader::{load_catalog, LoadReport};
use course_planner::core::models::Catalog;
use course_planner::core::resolver::{resolve_chain, resolve_unique_chain};
use course_planner::error;
use course_planner::logger::is_verbose_enabled;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Load the catalog named by config (or `--catalog`)
///
/// Unlike the menu, a missing file is an error here: a one-shot command has
/// nothing useful to print from an empty catalog.
///
/// # Errors
/// Returns a printable message when no path is configured or loading fails
pub fn load_configured(config: &Config) -> Result<(Catalog, PathBuf), String> {
    let path = config
        .catalog_path()
        .ok_or("✗ No catalog file given. Pass --catalog PATH or run `courseplanner config set catalog PATH`.")?;

    let (catalog, report) = load_catalog(&path, config.malformed_policy()).map_err(|e| {
        error!("Failed to load catalog {}: {e}", path.display());
        format!("✗ {e}")
    })?;

    print_load_summary(&catalog, &report, &path);
    Ok((catalog, path))
}

/// Verbose-only summary of a load, written to stderr
pub fn print_load_summary(catalog: &Catalog, report: &LoadReport, path: &Path) {
    if is_verbose_enabled() {
        let _ = write_load_summary(&mut io::stderr().lock(), catalog, report, path);
    }
}

/// Write the load summary: counts, skipped lines and dangling references
///
/// # Errors
/// Returns an error if writing to `out` fails
pub fn write_load_summary<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    report: &LoadReport,
    path: &Path,
) -> io::Result<()> {
    writeln!(
        out,
        "✓ Loaded {} courses from {} ({} replaced, {} skipped)",
        catalog.len(),
        path.display(),
        report.replaced,
        report.skipped.len()
    )?;
    for skipped in &report.skipped {
        writeln!(out, "  line {}: {} ({:?})", skipped.line, skipped.reason, skipped.content)?;
    }
    for (course, prereq) in catalog.dangling_references() {
        writeln!(out, "  {course} lists {prereq}, which is not in the catalog")?;
    }
    Ok(())
}

/// Print every course sorted by id
///
/// # Errors
/// Returns a printable message if the catalog cannot be loaded
pub fn run_list(config: &Config) -> Result<(), String> {
    let (catalog, _) = load_configured(config)?;
    print!("{}", format_course_list(&catalog));
    Ok(())
}

/// Print one course's details
///
/// # Errors
/// Returns a printable message if the catalog cannot be loaded
pub fn run_show(config: &Config, id: &str) -> Result<(), String> {
    let (catalog, _) = load_configured(config)?;
    print!("{}", format_course_details(catalog.get(id)));
    Ok(())
}

/// Print a course's prerequisite chain
///
/// # Errors
/// Returns a printable message if the catalog cannot be loaded
pub fn run_chain(config: &Config, id: &str, unique: bool) -> Result<(), String> {
    let (catalog, _) = load_configured(config)?;
    let chain = if unique {
        resolve_unique_chain(&catalog, id)
    } else {
        resolve_chain(&catalog, id)
    };
    print!("{}", format_chain(id, &chain));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_planner::core::loader::{load_catalog_from_str, MalformedPolicy};

    #[test]
    fn test_load_summary() {
        let content = "CSCI100,Intro\nCSCI100,Intro Again\nBROKEN\nCSCI200,Data Structures,CSCI100,MATH201\n";
        let (catalog, report) = load_catalog_from_str(content, MalformedPolicy::Skip).unwrap();

        let mut out = Vec::new();
        write_load_summary(&mut out, &catalog, &report, Path::new("courses.txt")).unwrap();
        let summary = String::from_utf8(out).unwrap();

        assert!(summary.starts_with("✓ Loaded 2 courses from courses.txt (1 replaced, 1 skipped)\n"));
        assert!(summary.contains("  line 3: "));
        assert!(summary.contains("\"BROKEN\""));
        assert!(summary.contains("  CSCI200 lists MATH201, which is not in the catalog\n"));
    }
}
