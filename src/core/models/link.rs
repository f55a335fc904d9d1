//! Directed links between resource nodes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relation carried by a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Source groups or introduces the target; drives the "Related Items" list
    Parent,
    /// Loose association
    Related,
    /// Missing or unrecognised relation name
    #[default]
    #[serde(other)]
    Other,
}

impl LinkKind {
    /// Lowercase name used in data files and CSS classes
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Related => "related",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed relation between two node ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    /// Id of the originating node
    pub source: String,

    /// Id of the receiving node
    pub target: String,

    /// Relation kind, stored as `type` in data files
    #[serde(rename = "type", default)]
    pub kind: LinkKind,
}

impl ResourceLink {
    /// Create a link of the given kind
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: LinkKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }

    /// Shorthand for a `parent` link
    #[must_use]
    pub fn parent(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(source, target, LinkKind::Parent)
    }

    /// Whether this link makes `target` a child of `source`
    #[must_use]
    pub fn is_parent(&self) -> bool {
        self.kind == LinkKind::Parent
    }
}
