//! Config command handler

use crate::args::ConfigSubcommand;
use course_planner::config::Config;
use std::io::{self, Write};
use std::path::Path;

/// Dispatch config subcommands
///
/// `get` shows `effective` (the file plus this run's CLI overrides). `set` and
/// `unset` edit `stored`, which holds only what the config file contains, and
/// write it to `config_file`.
///
/// # Errors
/// Returns a printable message if a key is unknown, a value is invalid, or
/// the config file cannot be written
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    effective: &Config,
    stored: &mut Config,
    defaults: &Config,
    config_file: &Path,
) -> Result<(), String> {
    match subcommand {
        None => handle_config_get(effective, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(effective, key),
        Some(ConfigSubcommand::Set { key, value }) => {
            handle_config_set(stored, &key, &value, config_file)
        }
        Some(ConfigSubcommand::Unset { key }) => {
            handle_config_unset(stored, defaults, &key, config_file)
        }
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Handle the config get subcommand
fn handle_config_get(config: &Config, key: Option<String>) -> Result<(), String> {
    if let Some(k) = key {
        let value = config
            .get(&k)
            .ok_or_else(|| format!("Unknown config key: '{k}'"))?;
        println!("{value}");
    } else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
    }
    Ok(())
}

/// Handle the config set subcommand
fn handle_config_set(
    stored: &mut Config,
    key: &str,
    value: &str,
    config_file: &Path,
) -> Result<(), String> {
    stored.set(key, value)?;
    stored
        .save_to(config_file)
        .map_err(|e| format!("Failed to save config: {e}"))?;
    println!("✓ Set {key} = {value}");
    Ok(())
}

/// Handle the config unset subcommand
fn handle_config_unset(
    stored: &mut Config,
    defaults: &Config,
    key: &str,
    config_file: &Path,
) -> Result<(), String> {
    stored.unset(key, defaults)?;
    stored
        .save_to(config_file)
        .map_err(|e| format!("Failed to save config: {e}"))?;
    println!("✓ Reset {key} to default");
    Ok(())
}

/// Handle the config reset subcommand
fn handle_config_reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let response = response.trim();
    if response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}
