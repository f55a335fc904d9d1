//! Render command handler
//!
//! Loads a resource graph, runs the force layout to rest and writes it out
//! as SVG, a standalone HTML page, or JSON positions.

use sitegraph::config::Config;
use sitegraph::core::models::ResourceGraph;
use sitegraph::core::render::RenderFormat;
use sitegraph::core::view::{GraphView, DEFAULT_HEIGHT, DEFAULT_WIDTH, INITIALIZE_DELAY};
use sitegraph::{error, info, verbose, warn};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

/// Arguments of the `render` subcommand
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Data file; falls back to config `data_file`
    pub input_file: Option<PathBuf>,
    /// Explicit output path
    pub output: Option<PathBuf>,
    /// Format name (svg, html, json)
    pub format: String,
    /// Canvas width override
    pub width: Option<u32>,
    /// Canvas height override
    pub height: Option<u32>,
    /// Node to show selected
    pub select: Option<String>,
    /// Tick budget override
    pub ticks: Option<usize>,
}

/// Run the render command. Returns `false` on failure.
pub fn run(options: &RenderOptions, config: &Config) -> bool {
    match render(options, config) {
        Ok(path) => {
            println!("✓ Graph rendered: {}", path.display());
            true
        }
        Err(err) => {
            error!("Render failed: {err}");
            eprintln!("{err}");
            false
        }
    }
}

fn render(options: &RenderOptions, config: &Config) -> Result<PathBuf, String> {
    let format = RenderFormat::from_str(&options.format)
        .map_err(|e| format!("✗ {e}. Use: svg, html, or json"))?;

    let input_file = super::resolve_data_file(options.input_file.as_deref(), config)?;
    let graph = ResourceGraph::load(&input_file)
        .map_err(|e| format!("✗ Failed to load {}: {e}", input_file.display()))?;
    info!(
        "Resource graph loaded: {} ({} nodes, {} links)",
        input_file.display(),
        graph.node_count(),
        graph.link_count()
    );

    for link in graph.dangling_links() {
        warn!(
            "Link {} -> {} references a missing node",
            link.source, link.target
        );
    }

    let width = options
        .width
        .or(config.graph.width)
        .unwrap_or(DEFAULT_WIDTH);
    let height = options
        .height
        .or(config.graph.height)
        .unwrap_or(DEFAULT_HEIGHT);

    let mut view = GraphView::new(graph)
        .with_size(width, height)
        .with_simulation_config(config.simulation_config());

    let now = Instant::now();
    view.mount(now);
    let ticks = view.settle(options.ticks.unwrap_or_else(|| config.max_ticks()));
    // A static render is the state after the reveal delay
    view.update(now + INITIALIZE_DELAY);
    verbose!("Layout settled after {ticks} ticks");

    if let Some(id) = options.select.as_deref() {
        view.select(id);
        if view.selected_node().is_none() {
            warn!("No node with id '{id}'; rendering without a selection");
        }
    }

    let output_path = output_path(options.output.as_deref(), &input_file, format, config)?;
    format
        .renderer()
        .write(&view, &output_path)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;
    info!("Graph exported to: {}", output_path.display());

    Ok(output_path)
}

/// Explicit output wins; otherwise `<output_dir>/<data stem>.<ext>`
fn output_path(
    output: Option<&Path>,
    input_file: &Path,
    format: RenderFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(path) = output {
        return Ok(path.to_path_buf());
    }

    let output_dir = PathBuf::from(&config.paths.output_dir);
    std::fs::create_dir_all(&output_dir).map_err(|e| {
        format!(
            "✗ Failed to create output directory {}: {e}",
            output_dir.display()
        )
    })?;

    let stem = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("resources");
    Ok(output_dir.join(format!("{stem}.{}", format.extension())))
}
