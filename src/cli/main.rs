//! Command-line interface entry point for `CoursePlanner`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use course_planner::config::Config;
use course_planner::info;
use course_planner::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // `stored` mirrors the config file; `config` adds this run's CLI overrides
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let mut config = stored.clone();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let result = match args.command.unwrap_or(Command::Menu) {
        Command::Menu => commands::menu::run(&config),
        Command::List => commands::catalog::run_list(&config),
        Command::Show { id } => commands::catalog::run_show(&config, &id),
        Command::Chain { id, unique } => commands::catalog::run_chain(&config, &id, unique),
        Command::Report { output } => commands::report::run(output.as_deref(), &config),
        Command::Config { subcommand } => commands::config::run(
            subcommand,
            &config,
            &mut stored,
            &defaults,
            &Config::get_config_file_path(),
        ),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
