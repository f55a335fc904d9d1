//! CLI command handlers for `sitegraph`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod inspect;
pub mod nav;
pub mod render;

use sitegraph::config::Config;
use std::path::{Path, PathBuf};

/// Resolve the data file: an explicit path wins over config `paths.data_file`
fn resolve_data_file(input_file: Option<&Path>, config: &Config) -> Result<PathBuf, String> {
    if let Some(path) = input_file {
        return Ok(path.to_path_buf());
    }
    if config.paths.data_file.is_empty() {
        return Err(
            "✗ No data file given and config 'data_file' is empty. Pass FILE or run `sitegraph config set data_file <path>`"
                .to_string(),
        );
    }
    Ok(PathBuf::from(&config.paths.data_file))
}
