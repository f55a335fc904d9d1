//! Shared library for `sitegraph`
//! Contains the resource graph view, force layout, renderers, and the static
//! site navigation descriptor used by the CLI.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
