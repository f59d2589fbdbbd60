//! Interactive menu command handler

use super::catalog::print_load_summary;
use course_planner::config::Config;
use course_planner::core::loader::load_catalog_or_empty;
use course_planner::core::menu::{prompt_for_path, run_menu};
use course_planner::info;
use std::io::{self, Write};
use std::path::PathBuf;

/// Run the interactive menu
///
/// The catalog path comes from config (or `--catalog`); otherwise the user is
/// prompted. An unreadable catalog is reported and the menu runs on an empty
/// catalog.
///
/// # Errors
/// Returns a printable message if the terminal cannot be read or written
pub fn run(config: &Config) -> Result<(), String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let path = match config.catalog_path() {
        Some(path) => path,
        None => match prompt_for_path(&mut input, &mut output).map_err(|e| e.to_string())? {
            Some(path) => PathBuf::from(path),
            None => return Ok(()),
        },
    };

    let (catalog, outcome) = load_catalog_or_empty(&path, config.malformed_policy());
    match outcome {
        Ok(report) => print_load_summary(&catalog, &report, &path),
        Err(e) => {
            writeln!(output, "{e}").map_err(|e| e.to_string())?;
            writeln!(output, "Continuing with an empty catalog.").map_err(|e| e.to_string())?;
        }
    }

    info!("Starting menu with {} courses", catalog.len());
    run_menu(&catalog, &mut input, &mut output).map_err(|e| format!("✗ Menu I/O failed: {e}"))
}
