//! Configuration module for `CoursePlanner`

use crate::core::loader::MalformedPolicy;
use crate::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory
const DIR_VARIABLE: &str = "$COURSE_PLANNER";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Catalog source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file to load; empty means prompt (menu) or require `--catalog`
    #[serde(default)]
    pub file: String,
    /// Malformed-line policy (`skip` or `abort`)
    #[serde(default)]
    pub on_malformed: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override catalog file path
    pub catalog: Option<String>,
    /// Override malformed-line policy
    pub on_malformed: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$COURSE_PLANNER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/courseplanner`
    /// - macOS: `~/Library/Application Support/courseplanner`
    /// - Windows: `%APPDATA%\courseplanner`
    #[must_use]
    pub fn get_courseplanner_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("courseplanner")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were filled in, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;
        let mut fill = |target: &mut String, default: &String| {
            if target.is_empty() && !default.is_empty() {
                target.clone_from(default);
                changed = true;
            }
        };

        fill(&mut self.logging.level, &defaults.logging.level);
        fill(&mut self.logging.file, &defaults.logging.file);
        fill(&mut self.catalog.file, &defaults.catalog.file);
        fill(&mut self.catalog.on_malformed, &defaults.catalog.on_malformed);
        fill(&mut self.paths.reports_dir, &defaults.paths.reports_dir);

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides affect this run only; the config file is not modified.
    /// Only non-`None` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(catalog) = &overrides.catalog {
            self.catalog.file.clone_from(catalog);
        }
        if let Some(policy) = &overrides.on_malformed {
            self.catalog.on_malformed.clone_from(policy);
        }

        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_courseplanner_dir`](Self::get_courseplanner_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_courseplanner_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$COURSE_PLANNER` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_courseplanner_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults (empty strings or false).
    /// `$COURSE_PLANNER` is expanded in path-like values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.catalog.file = Self::expand_variables(&config.catalog.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary, so this indicates a build defect.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, falling back to defaults
    ///
    /// Missing fields are filled in from defaults. Nothing is written to
    /// disk; the file is only created by [`save`](Self::save).
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            return defaults;
        }

        match fs::read_to_string(&config_file) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(mut config) => {
                    config.merge_defaults(&defaults);
                    config
                }
                Err(e) => {
                    warn!(
                        "Ignoring invalid config file {}: {e}",
                        config_file.display()
                    );
                    defaults
                }
            },
            Err(e) => {
                warn!("Could not read config file {}: {e}", config_file.display());
                defaults
            }
        }
    }

    /// Save configuration to the user config file
    ///
    /// The config directory is created if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration as TOML to `config_file`, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Effective malformed-line policy
    ///
    /// An empty or unrecognized value falls back to [`MalformedPolicy::Skip`].
    #[must_use]
    pub fn malformed_policy(&self) -> MalformedPolicy {
        if self.catalog.on_malformed.trim().is_empty() {
            return MalformedPolicy::default();
        }
        self.catalog.on_malformed.parse().unwrap_or_else(|e| {
            warn!("{e}; using '{}'", MalformedPolicy::default());
            MalformedPolicy::default()
        })
    }

    /// Configured catalog path, if any
    #[must_use]
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let trimmed = self.catalog.file.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `catalog`, `on_malformed`,
    /// `reports_dir` (dashed spellings are accepted too).
    ///
    /// # Returns
    /// The value as a string, or `None` if the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "catalog" | "catalog_file" | "catalog-file" => Some(self.catalog.file.clone()),
            "on_malformed" | "on-malformed" => Some(self.catalog.on_malformed.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value is invalid
    /// for it (`verbose` must be a boolean, `level` a known level,
    /// `on_malformed` either `skip` or `abort`)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                crate::logger::Level::parse(value)
                    .ok_or_else(|| format!("Invalid log level: '{value}'"))?;
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "catalog" | "catalog_file" | "catalog-file" => self.catalog.file = value.to_string(),
            "on_malformed" | "on-malformed" => {
                let policy: MalformedPolicy = value.parse()?;
                self.catalog.on_malformed = policy.to_string();
            }
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset it to the value in `defaults`)
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "catalog" | "catalog_file" | "catalog-file" => {
                self.catalog.file.clone_from(&defaults.catalog.file);
            }
            "on_malformed" | "on-malformed" => self
                .catalog
                .on_malformed
                .clone_from(&defaults.catalog.on_malformed),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// Succeeds without doing anything if the file doesn't exist. The CLI asks
    /// for confirmation before calling this.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[catalog]")?;
        writeln!(f, "  file = \"{}\"", self.catalog.file)?;
        writeln!(f, "  on_malformed = \"{}\"", self.catalog.on_malformed)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_policy_parsing() {
        let mut config = Config::default();
        assert_eq!(config.malformed_policy(), MalformedPolicy::Skip);

        config.catalog.on_malformed = "abort".to_string();
        assert_eq!(config.malformed_policy(), MalformedPolicy::Abort);

        config.catalog.on_malformed = "explode".to_string();
        assert_eq!(config.malformed_policy(), MalformedPolicy::Skip);
    }

    #[test]
    fn test_catalog_path() {
        let mut config = Config::default();
        assert!(config.catalog_path().is_none());

        config.catalog.file = "  ".to_string();
        assert!(config.catalog_path().is_none());

        config.catalog.file = "courses.txt".to_string();
        assert_eq!(config.catalog_path(), Some(PathBuf::from("courses.txt")));
    }

    #[test]
    fn test_expand_variables() {
        let expanded = Config::expand_variables("$COURSE_PLANNER/reports");
        assert!(!expanded.contains(DIR_VARIABLE));
        assert!(expanded.ends_with("reports"));
        assert_eq!(Config::expand_variables("./reports"), "./reports");
    }
}
