//! CLI argument definitions for `sitegraph`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use sitegraph::config::ConfigOverrides;
use sitegraph::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
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
        write!(f, "{}", Level::from(*self))
    }
}

/// Output format for the `nav` command
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum NavFormat {
    /// Indented outline
    #[default]
    Text,
    /// Nested `<ul>` menu
    Html,
    /// JSON tree
    Json,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `width`, `data_file`)
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
    /// Lay out the resource graph and render it.
    ///
    /// Runs the force simulation to rest and writes SVG, HTML, or JSON.
    Render {
        /// Resource data file (TOML or JSON); defaults to config `data_file`
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// Output file path (optional; defaults to config `output_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format: svg, html, or json
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// Canvas width in pixels (overrides config)
        #[arg(long, value_name = "PX")]
        width: Option<u32>,

        /// Canvas height in pixels (overrides config)
        #[arg(long, value_name = "PX")]
        height: Option<u32>,

        /// Node id to show selected, with its details panel
        #[arg(long, value_name = "ID")]
        select: Option<String>,

        /// Maximum simulation ticks (overrides config)
        #[arg(long, value_name = "N")]
        ticks: Option<usize>,
    },
    /// Show the details panel for one resource.
    Inspect {
        /// Node id to inspect
        #[arg(value_name = "ID")]
        id: String,

        /// Resource data file (TOML or JSON); defaults to config `data_file`
        #[arg(short = 'i', long = "input", value_name = "FILE")]
        input_file: Option<PathBuf>,
    },
    /// Print the site navigation menus.
    Nav {
        /// Print the backstage menu instead of the main one
        #[arg(long)]
        backstage: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = NavFormat::Text)]
        format: NavFormat,

        /// Mark entries leading to this route as active (html only)
        #[arg(long, value_name = "PATH")]
        current: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "sitegraph",
    about = "Resource graph and site navigation tooling",
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

    /// Override config data file
    #[arg(long = "data-file", value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Override config output directory
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means "keep the configured value".
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            data_file: self.data_file.as_ref().map(path_string),
            output_dir: self.out_dir.as_ref().map(path_string),
        }
    }
}
