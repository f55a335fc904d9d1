//! Resource node model

use serde::{Deserialize, Serialize};

/// A labeled item in the reading list (book, paper, talk, site...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceNode {
    /// Unique identifier referenced by links
    pub id: String,

    /// Display title
    pub title: String,

    /// Author or authors, free-form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Short description shown in the details panel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// External link for "Learn more"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ResourceNode {
    /// Create a node with only an id and a title
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: None,
            description: None,
            url: None,
        }
    }

    /// Builder: set the author
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Builder: set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set the external URL
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Author line as shown under a title, e.g. "by Donald Knuth"
    #[must_use]
    pub fn byline(&self) -> Option<String> {
        self.author.as_ref().map(|author| format!("by {author}"))
    }
}
