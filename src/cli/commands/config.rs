//! Config command handler

use crate::args::ConfigSubcommand;
use sitegraph::config::Config;
use sitegraph::{error, info};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Dispatch config subcommands
///
/// `config` is the stored configuration without CLI overrides applied, since
/// `set` and `unset` write all of it back to disk.
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let path = Config::get_config_file_path();
    let ok = match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => set(config, &path, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, &path, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(&mut io::stdin().lock()),
    };
    if !ok {
        std::process::exit(1);
    }
}

/// Print one value, or the whole config with its file location
fn show(config: &Config, key: Option<&str>) -> bool {
    match key {
        Some(k) => match config.get(k) {
            Some(value) => {
                println!("{value}");
                true
            }
            None => {
                eprintln!("✗ Unknown config key: '{k}'");
                false
            }
        },
        None => {
            println!("\n=== Configuration ===");
            println!("# {}\n", Config::get_config_file_path().display());
            print!("{config}");
            true
        }
    }
}

fn set(config: &mut Config, path: &Path, key: &str, value: &str) -> bool {
    if let Err(e) = config.set(key, value) {
        eprintln!("✗ {e}");
        return false;
    }
    if !persist(config, path) {
        return false;
    }
    info!("Config '{key}' set to '{value}'");
    println!("✓ Set {key} = {value}");
    true
}

fn unset(config: &mut Config, path: &Path, defaults: &Config, key: &str) -> bool {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("✗ {e}");
        return false;
    }
    if !persist(config, path) {
        return false;
    }
    println!(
        "✓ Reset {key} to default ({})",
        config.get(key).unwrap_or_default()
    );
    true
}

fn persist(config: &Config, path: &Path) -> bool {
    match config.save_to(path) {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to save config: {e}");
            eprintln!("✗ Failed to save config: {e}");
            false
        }
    }
}

/// Delete the config file after a y/yes confirmation read from `input`
fn reset(input: &mut impl BufRead) -> bool {
    let path = Config::get_config_file_path();
    if !path.exists() {
        println!("✓ Config is already at defaults");
        return true;
    }

    print!("Reset {} to defaults? (y/n): ", path.display());
    io::stdout().flush().ok();

    let mut response = String::new();
    input.read_line(&mut response).ok();

    if !is_confirmation(&response) {
        println!("✗ Reset cancelled");
        return true;
    }
    match Config::reset() {
        Ok(()) => {
            println!("✓ Config reset to defaults");
            true
        }
        Err(e) => {
            error!("Failed to remove config file {}: {e}", path.display());
            eprintln!("✗ Failed to remove config file: {e}");
            false
        }
    }
}

fn is_confirmation(response: &str) -> bool {
    let answer = response.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
