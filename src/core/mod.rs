//! Core module for the resource graph and site navigation

pub mod config;
pub mod models;
pub mod navigation;
pub mod render;
pub mod simulation;
pub mod view;

/// Returns the current version of the `sitegraph` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
