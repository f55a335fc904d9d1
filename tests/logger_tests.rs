//! Integration tests for logger behavior.

use sitegraph::logger::{init_file_logging, level, set_level, set_level_from_str, Level};
use sitegraph::{debug, error, info, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("DEBUG"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn level_round_trips_through_strings() {
    for lvl in [Level::Error, Level::Warn, Level::Info, Level::Debug] {
        assert_eq!(lvl.to_string().parse::<Level>(), Ok(lvl));
    }
    assert!(Level::Error < Level::Debug);
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    assert!(level() >= Level::Error);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[test]
fn file_logging_creates_parent_dirs() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("sitegraph.log");

    assert!(init_file_logging(&path));
    assert!(path.exists());
}
