//! Command-line interface entry point for `sitegraph`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use sitegraph::config::Config;
use sitegraph::info;
use sitegraph::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup; CLI overrides go on a runtime copy
    // so `config set`/`unset` never write them back
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let mut config = stored.clone();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins, then config logging.level, then warn
    let effective_level = args
        .log_level
        .map(Into::into)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Command::Render {
            input_file,
            output,
            format,
            width,
            height,
            select,
            ticks,
        } => {
            let options = commands::render::RenderOptions {
                input_file,
                output,
                format,
                width,
                height,
                select,
                ticks,
            };
            if !commands::render::run(&options, &config) {
                std::process::exit(1);
            }
        }
        Command::Inspect { id, input_file } => {
            if !commands::inspect::run(&id, input_file.as_deref(), &config) {
                std::process::exit(1);
            }
        }
        Command::Nav {
            backstage,
            format,
            current,
        } => {
            if !commands::nav::run(backstage, format, current.as_deref()) {
                std::process::exit(1);
            }
        }
    }
}
