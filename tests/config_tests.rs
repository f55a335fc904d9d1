//! Integration tests for configuration management

use sitegraph::config::{Config, ConfigOverrides};
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
        !config.paths.data_file.is_empty(),
        "Default data_file should not be empty"
    );
    assert!(
        !config.paths.output_dir.is_empty(),
        "Default output_dir should not be empty"
    );
    assert_eq!(config.graph.width, Some(800));
    assert_eq!(config.graph.height, Some(600));
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[graph]
width = 1200
height = 900
link_distance = 80.0
charge_strength = -150.0
collide_radius = 20.0
max_ticks = 500

[paths]
data_file = "./reading.toml"
output_dir = "./site"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.graph.width, Some(1200));
    assert_eq!(config.graph.height, Some(900));
    assert_eq!(config.graph.link_distance, Some(80.0));
    assert_eq!(config.graph.charge_strength, Some(-150.0));
    assert_eq!(config.graph.collide_radius, Some(20.0));
    assert_eq!(config.graph.max_ticks, Some(500));
    assert_eq!(config.paths.data_file, "./reading.toml");
    assert_eq!(config.paths.output_dir, "./site");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"

[graph]

[paths]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert!(config.graph.width.is_none());
    assert_eq!(config.paths.data_file, "");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$SITEGRAPH/test.log"

[paths]
data_file = "$SITEGRAPH/resources.toml"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("sitegraph"));
    assert!(!config.logging.file.contains("$SITEGRAPH"));
    assert!(config.paths.data_file.ends_with("resources.toml"));
    assert!(!config.paths.data_file.contains("$SITEGRAPH"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config.set("verbose", "true").expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config.set("width", "1024").expect("Failed to set width");
    assert_eq!(config.get("width").unwrap(), "1024");

    config
        .set("charge-strength", "-50")
        .expect("Failed to set charge strength");
    assert_eq!(config.graph.charge_strength, Some(-50.0));

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("level", "loud").is_err());
    assert!(config.set("width", "wide").is_err());
    assert!(config.set("verbose", "maybe").is_err());
    assert_eq!(config.graph.width, Some(800));
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("max_ticks", "10").expect("Failed to set max_ticks");

    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config
        .unset("max_ticks", &defaults)
        .expect("Failed to unset max_ticks");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.graph.max_ticks, defaults.graph.max_ticks);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("height", "480").expect("Failed to set height");
    config.save_to(&config_file).expect("Failed to save config");

    let loaded = Config::load_from(&config_file);

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.graph.height, Some(480));
}

#[test]
fn test_load_from_missing_file_writes_defaults() {
    let (_temp_dir, config_file) = setup_temp_config();
    assert!(!config_file.exists());

    let config = Config::load_from(&config_file);

    assert!(config_file.exists());
    assert_eq!(config.graph.width, Config::from_defaults().graph.width);
}

#[test]
fn test_load_from_completes_partial_file() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::write(&config_file, "[logging]\nlevel = \"error\"\n").expect("Failed to write config");

    let config = Config::load_from(&config_file);
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.graph.max_ticks, Config::from_defaults().graph.max_ticks);

    let rewritten = fs::read_to_string(&config_file).expect("Failed to read config");
    assert!(rewritten.contains("[graph]"));
}

#[test]
fn test_load_from_invalid_file_falls_back_to_defaults() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::write(&config_file, "this is = = not toml").expect("Failed to write config");

    let config = Config::load_from(&config_file);
    assert_eq!(config.logging.level, Config::from_defaults().logging.level);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        data_file: Some("./custom.json".to_string()),
        output_dir: Some("./custom_out".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_file, "./custom.json");
    assert_eq!(config.paths.output_dir, "./custom_out");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.paths.output_dir.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.output_dir, before);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[graph]"));
    assert!(display_str.contains("[paths]"));

    assert!(display_str.contains("level"));
    assert!(display_str.contains("charge_strength"));
    assert!(display_str.contains("data_file"));
}

#[test]
fn test_simulation_config_follows_graph_section() {
    let mut config = Config::from_defaults();
    config.set("width", "1000").expect("Failed to set width");
    config
        .set("link_distance", "42")
        .expect("Failed to set link distance");

    let sim = config.simulation_config();
    assert!((sim.width - 1000.0).abs() < f64::EPSILON);
    assert!((sim.link_distance - 42.0).abs() < f64::EPSILON);
}

#[test]
fn test_get_sitegraph_dir() {
    let dir = Config::get_sitegraph_dir();

    assert!(dir.to_string_lossy().contains("sitegraph"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
