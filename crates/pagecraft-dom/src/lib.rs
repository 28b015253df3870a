// Pagecraft DOM - element tree model and string renderer
// Build a tree of typed nodes, render it to a compact HTML string

pub mod node;
pub mod render;

pub use node::{Element, Node};
pub use render::render_string;
