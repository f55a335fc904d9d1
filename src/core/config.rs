//! Configuration module for `sitegraph`

use crate::core::simulation::SimulationConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to [`Config::get_sitegraph_dir`] in path values
const DIR_VARIABLE: &str = "$SITEGRAPH";

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

/// Graph layout configuration
///
/// Every field is optional so that a partially written config file can be
/// completed from the compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Canvas width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Canvas height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Rest length of link springs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_distance: Option<f64>,
    /// Many-body strength (negative repels)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_strength: Option<f64>,
    /// Collision radius around each node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collide_radius: Option<f64>,
    /// Upper bound on simulation ticks for static renders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ticks: Option<usize>,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Default resource graph data file (TOML or JSON)
    #[serde(default)]
    pub data_file: String,
    /// Directory for rendered output files
    #[serde(default)]
    pub output_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Graph layout settings
    #[serde(default)]
    pub graph: GraphConfig,
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
    /// Override default data file
    pub data_file: Option<String>,
    /// Override output directory
    pub output_dir: Option<String>,
}

/// Fill an empty string from its default. Returns `true` when it changed.
fn merge_str(value: &mut String, default: &str) -> bool {
    if value.is_empty() && !default.is_empty() {
        default.clone_into(value);
        true
    } else {
        false
    }
}

/// Fill a missing option from its default. Returns `true` when it changed.
fn merge_opt<T: Copy>(value: &mut Option<T>, default: Option<T>) -> bool {
    if value.is_none() && default.is_some() {
        *value = default;
        true
    } else {
        false
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str, kind: &str) -> Result<T, String> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| format!("Invalid {kind} value for '{key}': '{value}'"))
}

fn display_opt<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

impl Config {
    /// Get the `$SITEGRAPH` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/sitegraph`
    /// - macOS: `~/Library/Application Support/sitegraph`
    /// - Windows: `%APPDATA%\sitegraph`
    #[must_use]
    pub fn get_sitegraph_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sitegraph")
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds.
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_sitegraph_dir().join(CONFIG_FILE_NAME)
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and set in `defaults` are touched, so
    /// upgrading the binary adds new settings without clobbering user values.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let merged = [
            merge_str(&mut self.logging.level, &defaults.logging.level),
            merge_str(&mut self.logging.file, &defaults.logging.file),
            merge_opt(&mut self.graph.width, defaults.graph.width),
            merge_opt(&mut self.graph.height, defaults.graph.height),
            merge_opt(&mut self.graph.link_distance, defaults.graph.link_distance),
            merge_opt(
                &mut self.graph.charge_strength,
                defaults.graph.charge_strength,
            ),
            merge_opt(&mut self.graph.collide_radius, defaults.graph.collide_radius),
            merge_opt(&mut self.graph.max_ticks, defaults.graph.max_ticks),
            merge_str(&mut self.paths.data_file, &defaults.paths.data_file),
            merge_str(&mut self.paths.output_dir, &defaults.paths.output_dir),
        ];
        merged.contains(&true)
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides affect this run only. Apply them to a copy, not to a config
    /// that will be saved.
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
        if let Some(data_file) = &overrides.data_file {
            self.paths.data_file.clone_from(data_file);
        }
        if let Some(output_dir) = &overrides.output_dir {
            self.paths.output_dir.clone_from(output_dir);
        }
    }

    /// Expand `$SITEGRAPH` to the config directory
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_sitegraph_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$SITEGRAPH` is expanded in
    /// path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let config = Config::from_toml(r#"
    /// [paths]
    /// data_file = "$SITEGRAPH/resources.toml"
    /// "#)?;
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_file = Self::expand_variables(&config.paths.data_file);
        config.paths.output_dir = Self::expand_variables(&config.paths.output_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the compiled-in default configuration is not valid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, or create it from defaults
    ///
    /// Falls back to defaults if the file exists but cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from a specific file
    ///
    /// - Existing file: parsed, completed from defaults, and re-saved if anything was added
    /// - Missing file: defaults are written to `path` and returned
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let defaults = Self::from_defaults();

        if !path.exists() {
            let _ = defaults.save_to(path);
            return defaults;
        }

        let Ok(content) = fs::read_to_string(path) else {
            return defaults;
        };
        match Self::from_toml(&content) {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save_to(path);
                }
                config
            }
            Err(_) => defaults,
        }
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created, the config
    /// cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to a specific file, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config cannot
    /// be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `width`, `height`,
    /// `link_distance`, `charge_strength`, `collide_radius`, `max_ticks`,
    /// `data_file`, `output_dir`. Hyphenated spellings are accepted too.
    ///
    /// Returns `None` if the key is not recognized.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "level" => self.logging.level.clone(),
            "file" => self.logging.file.clone(),
            "verbose" => self.logging.verbose.to_string(),
            "width" => display_opt(self.graph.width),
            "height" => display_opt(self.graph.height),
            "link_distance" | "link-distance" => display_opt(self.graph.link_distance),
            "charge_strength" | "charge-strength" => display_opt(self.graph.charge_strength),
            "collide_radius" | "collide-radius" => display_opt(self.graph.collide_radius),
            "max_ticks" | "max-ticks" => display_opt(self.graph.max_ticks),
            "data_file" | "data-file" => self.paths.data_file.clone(),
            "output_dir" | "output-dir" | "out_dir" => self.paths.output_dir.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed into the field's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                value
                    .parse::<crate::logger::Level>()
                    .map_err(|e| format!("Invalid value for 'level': {e}"))?;
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse_value(key, value, "boolean")?,
            "width" => self.graph.width = Some(parse_value(key, value, "integer")?),
            "height" => self.graph.height = Some(parse_value(key, value, "integer")?),
            "link_distance" | "link-distance" => {
                self.graph.link_distance = Some(parse_value(key, value, "number")?);
            }
            "charge_strength" | "charge-strength" => {
                self.graph.charge_strength = Some(parse_value(key, value, "number")?);
            }
            "collide_radius" | "collide-radius" => {
                self.graph.collide_radius = Some(parse_value(key, value, "number")?);
            }
            "max_ticks" | "max-ticks" => {
                self.graph.max_ticks = Some(parse_value(key, value, "integer")?);
            }
            "data_file" | "data-file" => self.paths.data_file = value.to_string(),
            "output_dir" | "output-dir" | "out_dir" => self.paths.output_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "width" => self.graph.width = defaults.graph.width,
            "height" => self.graph.height = defaults.graph.height,
            "link_distance" | "link-distance" => {
                self.graph.link_distance = defaults.graph.link_distance;
            }
            "charge_strength" | "charge-strength" => {
                self.graph.charge_strength = defaults.graph.charge_strength;
            }
            "collide_radius" | "collide-radius" => {
                self.graph.collide_radius = defaults.graph.collide_radius;
            }
            "max_ticks" | "max-ticks" => self.graph.max_ticks = defaults.graph.max_ticks,
            "data_file" | "data-file" => self.paths.data_file.clone_from(&defaults.paths.data_file),
            "output_dir" | "output-dir" | "out_dir" => {
                self.paths.output_dir.clone_from(&defaults.paths.output_dir);
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it from defaults.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Build simulation parameters from the `[graph]` section
    ///
    /// Unset fields fall back to [`SimulationConfig::default`].
    #[must_use]
    pub fn simulation_config(&self) -> SimulationConfig {
        let base = SimulationConfig::default();
        SimulationConfig {
            width: self.graph.width.map_or(base.width, f64::from),
            height: self.graph.height.map_or(base.height, f64::from),
            link_distance: self.graph.link_distance.unwrap_or(base.link_distance),
            charge_strength: self.graph.charge_strength.unwrap_or(base.charge_strength),
            collide_radius: self.graph.collide_radius.unwrap_or(base.collide_radius),
            ..base
        }
    }

    /// Tick budget for static renders
    #[must_use]
    pub fn max_ticks(&self) -> usize {
        self.graph.max_ticks.unwrap_or(DEFAULT_MAX_TICKS)
    }
}

/// Tick budget used when the config does not set one
pub const DEFAULT_MAX_TICKS: usize = 300;

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[graph]")?;
        writeln!(f, "  width = {}", display_opt(self.graph.width))?;
        writeln!(f, "  height = {}", display_opt(self.graph.height))?;
        writeln!(f, "  link_distance = {}", display_opt(self.graph.link_distance))?;
        writeln!(
            f,
            "  charge_strength = {}",
            display_opt(self.graph.charge_strength)
        )?;
        writeln!(
            f,
            "  collide_radius = {}",
            display_opt(self.graph.collide_radius)
        )?;
        writeln!(f, "  max_ticks = {}", display_opt(self.graph.max_ticks))?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_file = \"{}\"", self.paths.data_file)?;
        writeln!(f, "  output_dir = \"{}\"", self.paths.output_dir)?;

        Ok(())
    }
}
