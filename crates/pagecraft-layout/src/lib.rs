// Pagecraft Layout - declarative HTML document-shell component
// Maps a configuration of named properties to an ordered document tree

pub mod config;
pub mod layout;

pub use config::{LayoutConfig, OpenGraph, ScriptSpec, TwitterCard};
pub use layout::{render, render_string};

// Re-export the tree types so callers can build noscript nodes without
// depending on pagecraft-dom directly
pub use pagecraft_dom::{Element, Node};
