//! Data models for the resource reading-list graph

pub mod graph;
pub mod link;
pub mod resource;

pub use graph::ResourceGraph;
pub use link::{LinkKind, ResourceLink};
pub use resource::ResourceNode;
