//! Configuration module for `DegreePlanner`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

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

/// Variable expanded to the config directory inside path values
const DIR_VARIABLE: &str = "$DEGREE_PLANNER";

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

/// Catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the course catalog JSON file
    #[serde(default)]
    pub path: String,
}

/// Transfer lookup configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferConfig {
    /// Interpreter used to run the lookup script (empty = auto-detect)
    #[serde(default)]
    pub program: String,
    /// Path to the equivalency lookup script
    #[serde(default)]
    pub script: String,
    /// Seconds to wait for the script before giving up
    #[serde(default)]
    pub timeout_secs: u64,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Transfer lookup settings
    #[serde(default)]
    pub transfer: TransferConfig,
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
    /// Override catalog path
    pub catalog_path: Option<String>,
    /// Override lookup interpreter
    pub transfer_program: Option<String>,
    /// Override lookup script path
    pub transfer_script: Option<String>,
    /// Override lookup timeout
    pub transfer_timeout_secs: Option<u64>,
}

impl Config {
    /// Get the `$DEGREE_PLANNER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/degreeplanner`
    /// - macOS: `~/Library/Application Support/degreeplanner`
    /// - Windows: `%APPDATA%\degreeplanner`
    #[must_use]
    pub fn get_degree_planner_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("degreeplanner")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty (or zero) here and set in the defaults are
    /// updated, so upgrades pick up new settings without touching user edits.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.catalog.path.is_empty() && !defaults.catalog.path.is_empty() {
            self.catalog.path.clone_from(&defaults.catalog.path);
            changed = true;
        }

        if self.transfer.script.is_empty() && !defaults.transfer.script.is_empty() {
            self.transfer.script.clone_from(&defaults.transfer.script);
            changed = true;
        }
        if self.transfer.timeout_secs == 0 && defaults.transfer.timeout_secs != 0 {
            self.transfer.timeout_secs = defaults.transfer.timeout_secs;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides only last for the current run; the config file is untouched.
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

        if let Some(path) = &overrides.catalog_path {
            self.catalog.path.clone_from(path);
        }

        if let Some(program) = &overrides.transfer_program {
            self.transfer.program.clone_from(program);
        }
        if let Some(script) = &overrides.transfer_script {
            self.transfer.script.clone_from(script);
        }
        if let Some(timeout) = overrides.transfer_timeout_secs {
            self.transfer.timeout_secs = timeout;
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_degree_planner_dir`](Self::get_degree_planner_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_degree_planner_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$DEGREE_PLANNER` to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_degree_planner_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults. `$DEGREE_PLANNER` is expanded in
    /// path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.catalog.path = Self::expand_variables(&config.catalog.path);
        config.transfer.program = Self::expand_variables(&config.transfer.program);
        config.transfer.script = Self::expand_variables(&config.transfer.script);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Debug builds use `DefaultCLIConfigDebug.toml`, release builds
    /// `DefaultCLIConfigRelease.toml`.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).unwrap_or_default()
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// An existing file is merged with any new default fields (and re-saved if
    /// that changed anything). On first run the defaults are written out.
    /// Any read or parse failure falls back to the defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, or the directory
    /// or file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `catalog`, `program`,
    /// `script`, `timeout`. Dashed and dotted spellings are accepted for the
    /// longer names (`catalog.path`, `timeout_secs`, ...).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "catalog" | "catalog.path" | "catalog_path" | "catalog-path" => {
                Some(self.catalog.path.clone())
            }
            "program" | "transfer.program" => Some(self.transfer.program.clone()),
            "script" | "transfer.script" => Some(self.transfer.script.clone()),
            "timeout" | "timeout_secs" | "timeout-secs" | "transfer.timeout_secs" => {
                Some(self.transfer.timeout_secs.to_string())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Accepts the same keys as [`get`](Config::get). Call
    /// [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed (e.g., "maybe" for `verbose`)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "catalog" | "catalog.path" | "catalog_path" | "catalog-path" => {
                self.catalog.path = value.to_string();
            }
            "program" | "transfer.program" => self.transfer.program = value.to_string(),
            "script" | "transfer.script" => self.transfer.script = value.to_string(),
            "timeout" | "timeout_secs" | "timeout-secs" | "transfer.timeout_secs" => {
                self.transfer.timeout_secs = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid number of seconds for 'timeout': '{value}'"))?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "catalog" | "catalog.path" | "catalog_path" | "catalog-path" => {
                self.catalog.path.clone_from(&defaults.catalog.path);
            }
            "program" | "transfer.program" => {
                self.transfer.program.clone_from(&defaults.transfer.program);
            }
            "script" | "transfer.script" => {
                self.transfer.script.clone_from(&defaults.transfer.script);
            }
            "timeout" | "timeout_secs" | "timeout-secs" | "transfer.timeout_secs" => {
                self.transfer.timeout_secs = defaults.transfer.timeout_secs;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it. Succeeds when the file
    /// does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted
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
        writeln!(f, "  path = \"{}\"", self.catalog.path)?;

        writeln!(f, "\n[transfer]")?;
        writeln!(f, "  program = \"{}\"", self.transfer.program)?;
        writeln!(f, "  script = \"{}\"", self.transfer.script)?;
        writeln!(f, "  timeout_secs = {}", self.transfer.timeout_secs)?;

        Ok(())
    }
}
