//! Integration tests for configuration management

use course_planner::config::{Config, ConfigOverrides};
use course_planner::core::loader::MalformedPolicy;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.catalog.on_malformed, "skip");
    assert!(config.catalog_path().is_none());
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[catalog]
file = "./courses.txt"
on_malformed = "abort"

[paths]
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.catalog_path(), Some(PathBuf::from("./courses.txt")));
    assert_eq!(config.malformed_policy(), MalformedPolicy::Abort);
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    // Missing sections and fields use serde defaults
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.catalog.file, "");
    assert_eq!(config.malformed_policy(), MalformedPolicy::Skip);
}

#[test]
fn test_config_from_toml_invalid() {
    assert!(Config::from_toml("[logging\nlevel = ").is_err());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$COURSE_PLANNER/test.log"

[catalog]
file = "$COURSE_PLANNER/courses.txt"

[paths]
reports_dir = "$COURSE_PLANNER/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    for value in [
        &config.logging.file,
        &config.catalog.file,
        &config.paths.reports_dir,
    ] {
        assert!(value.contains("courseplanner"), "not expanded: {value}");
        assert!(!value.contains("$COURSE_PLANNER"));
    }
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config
        .set("catalog", "ABCU_input.txt")
        .expect("Failed to set catalog");
    assert_eq!(config.get("catalog").unwrap(), "ABCU_input.txt");
    assert_eq!(config.get("catalog-file").unwrap(), "ABCU_input.txt");

    config
        .set("on_malformed", "ABORT")
        .expect("Failed to set on_malformed");
    assert_eq!(config.get("on-malformed").unwrap(), "abort");

    config
        .set("reports-dir", "/tmp/reports")
        .expect("Failed to set reports_dir");
    assert_eq!(config.get("reports_dir").unwrap(), "/tmp/reports");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("level", "loud").is_err());
    assert!(config.set("on_malformed", "ignore").is_err());
    assert_eq!(config.catalog.on_malformed, "skip");
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "debug").expect("Failed to set level");
    config.set("catalog", "other.txt").expect("Failed to set catalog");

    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config
        .unset("catalog", &defaults)
        .expect("Failed to unset catalog");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.catalog.file, defaults.catalog.file);
    assert!(config.unset("unknown_key", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("on_malformed", "abort").expect("Failed to set policy");

    config.save_to(&config_file).expect("Failed to save config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
    assert_eq!(loaded_config.malformed_policy(), MalformedPolicy::Abort);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        catalog: Some("custom.txt".to_string()),
        on_malformed: Some("abort".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.catalog_path(), Some(PathBuf::from("custom.txt")));
    assert_eq!(config.malformed_policy(), MalformedPolicy::Abort);
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_saving_stored_config_leaves_out_overrides() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut stored = Config::from_defaults();
    let mut effective = stored.clone();
    effective.apply_overrides(&ConfigOverrides {
        catalog: Some("/tmp/one_off.txt".to_string()),
        on_malformed: Some("abort".to_string()),
        ..Default::default()
    });

    stored.set("level", "debug").expect("Failed to set level");
    stored.save_to(&config_file).expect("Failed to save config");

    let saved = fs::read_to_string(&config_file).expect("Failed to read config");
    assert!(!saved.contains("one_off"));
    assert!(!saved.contains("abort"));
    assert_eq!(effective.catalog.file, "/tmp/one_off.txt");
}

#[test]
fn test_save_to_creates_parent_dirs() {
    let (temp_dir, _) = setup_temp_config();
    let nested = temp_dir.path().join("a").join("b").join("config.toml");

    Config::from_defaults()
        .save_to(&nested)
        .expect("Failed to save config");
    assert!(nested.exists());
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert_eq!(config.catalog.file, defaults.catalog.file);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[catalog]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("on_malformed"));
    assert!(display_str.contains("reports_dir"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"

[catalog]
on_malformed = ""

[paths]
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.catalog.on_malformed, defaults.catalog.on_malformed);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[catalog]
file = "mine.txt"
on_malformed = "abort"

[paths]
reports_dir = "/my/reports"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    assert!(!config.merge_defaults(&defaults));

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.catalog.file, "mine.txt");
    assert_eq!(config.catalog.on_malformed, "abort");
}

#[test]
fn test_get_courseplanner_dir() {
    let dir = Config::get_courseplanner_dir();

    assert!(dir.to_string_lossy().contains("courseplanner"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
