//! Nav command handler: prints the site navigation menus

use crate::args::NavFormat;
use sitegraph::core::navigation::{self, menu, NavNode, BACKSTAGE_TREE, NAVIGATION_TREE};
use sitegraph::{error, warn};
use std::slice;

/// Run the nav command. Returns `false` on failure.
pub fn run(backstage: bool, format: NavFormat, current: Option<&str>) -> bool {
    let roots: &[NavNode] = if backstage {
        slice::from_ref(&BACKSTAGE_TREE)
    } else {
        NAVIGATION_TREE
    };

    if let Some(path) = current {
        if navigation::find_by_path(roots, path).is_none() {
            warn!("No navigation entry for '{path}'");
        }
    }

    let rendered = match format {
        NavFormat::Text => Ok(menu::render_text(roots)),
        NavFormat::Html => menu::render_html(roots, current),
        NavFormat::Json => menu::render_json(roots).map(|json| json + "\n"),
    };
    match rendered {
        Ok(out) => {
            print!("{out}");
            true
        }
        Err(e) => {
            error!("Failed to render navigation: {e}");
            eprintln!("✗ Failed to render navigation: {e}");
            false
        }
    }
}
