//! The site's hand-authored menus

use super::NavNode;

/// Primary site menu
pub const NAVIGATION_TREE: &[NavNode] = &[
    NavNode::link("about", "About", "/about"),
    NavNode::link("blog", "Blog", "/blog"),
    NavNode::section(
        "projects",
        "Projects",
        "/projects",
        &[
            NavNode::link("cue", "Cue", "/projects/cue"),
            NavNode::link("blank", "Blank", "/projects/blank"),
        ],
    ),
    NavNode::section("research", "Research", "/research", &[]),
    NavNode::section("resources", "Resources", "/resources", &[]),
    NavNode::link("contact", "Contact", "/contact"),
];

/// Behind-the-scenes menu
pub const BACKSTAGE_TREE: NavNode = NavNode::section(
    "backstage",
    "// Backstage",
    "/backstage",
    &[
        NavNode::link("quotes", "Quotes.yaml", "/backstage/quotes"),
        NavNode::section(
            "stats",
            "Stats.db",
            "/backstage/stats",
            &[NavNode::link("schema", "Schema.sql", "/backstage/schema")],
        ),
    ],
);
