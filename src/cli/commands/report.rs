//! Report command handler

use super::catalog::load_configured;
use course_planner::config::Config;
use course_planner::core::report::{MarkdownReporter, ReportContext};
use course_planner::{error, info};
use std::path::{Path, PathBuf};

/// Generate the Markdown catalog report
///
/// # Arguments
/// * `output` - Optional output path; defaults to `<catalog stem>_report.md`
///   in the configured reports directory
/// * `config` - Configuration with catalog path and reports directory
///
/// # Errors
/// Returns a printable message if loading, rendering or writing fails
pub fn run(output: Option<&Path>, config: &Config) -> Result<(), String> {
    let (catalog, catalog_path) = load_configured(config)?;
    let output_path = resolve_output_path(output, &catalog_path, config)?;

    let ctx = ReportContext::new(&catalog, catalog_path.display().to_string());
    MarkdownReporter::new()
        .generate(&ctx, &output_path)
        .map_err(|e| {
            error!("Report generation failed for {}: {e}", output_path.display());
            format!("✗ Failed to write report {}: {e}", output_path.display())
        })?;

    info!("Wrote catalog report to {}", output_path.display());
    println!("✓ Report generated: {}", output_path.display());
    Ok(())
}

fn resolve_output_path(
    output: Option<&Path>,
    catalog_path: &Path,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(path) = output {
        return Ok(path.to_path_buf());
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let stem = catalog_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("catalog");
    Ok(reports_dir.join(format!("{stem}_report.md")))
}
