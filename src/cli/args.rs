//! CLI argument definitions for `DegreePlanner`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use degree_planner::config::ConfigOverrides;
use degree_planner::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for
/// runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `catalog`, `timeout`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show requirement progress for a set of courses.
    ///
    /// Each CODE counts as one selection; repeat a code to select it again.
    Requirements {
        /// Selected course codes (e.g., "CMSC 201" or CMSC201)
        #[arg(value_name = "CODES")]
        codes: Vec<String>,

        /// Credits from transfer courses with no catalog match
        #[arg(long, value_name = "CREDITS", default_value_t = 0.0)]
        extra_credits: f32,

        /// Catalog JSON file (defaults to config `catalog.path`)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Prefill the plan with the Computer Science B.S. pathway
        #[arg(long)]
        pathway: bool,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up transfer equivalencies from a community college.
    Transfer {
        /// Source institution id (see `schools`)
        #[arg(long, value_name = "ID")]
        school: u32,

        /// Local subject prefix to filter on (e.g., CMSC)
        #[arg(long, value_name = "PREFIX")]
        prefix: Option<String>,

        /// Source institution class to filter on
        #[arg(long, value_name = "CLASS")]
        source_class: Option<String>,

        /// Catalog year
        #[arg(long, value_name = "YEAR")]
        year: Option<u16>,

        /// Catalog JSON file used to flag unmatched rows (defaults to config `catalog.path`)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
    /// List supported source institutions.
    Schools,
}

#[derive(Parser, Debug)]
#[command(
    name = "degreeplanner",
    about = "DegreePlanner command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalog path
    #[arg(long = "config-catalog", value_name = "FILE")]
    pub config_catalog: Option<PathBuf>,

    /// Override config lookup interpreter
    #[arg(long = "config-transfer-program", value_name = "PROGRAM")]
    pub config_transfer_program: Option<String>,

    /// Override config lookup interpreter (short form)
    #[arg(long = "python", value_name = "PROGRAM")]
    pub python: Option<String>,

    /// Override config lookup script path
    #[arg(long = "config-transfer-script", value_name = "PATH")]
    pub config_transfer_script: Option<PathBuf>,

    /// Override config lookup timeout in seconds
    #[arg(long = "config-transfer-timeout", value_name = "SECS")]
    pub config_transfer_timeout: Option<u64>,

    /// Override config lookup timeout in seconds (short form)
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--python`) take precedence over long-form
    /// flags (e.g., `--config-transfer-program`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            catalog_path: self
                .config_catalog
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            transfer_program: self
                .python
                .clone()
                .or_else(|| self.config_transfer_program.clone()),
            transfer_script: self
                .config_transfer_script
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            transfer_timeout_secs: self.timeout.or(self.config_transfer_timeout),
        }
    }
}
