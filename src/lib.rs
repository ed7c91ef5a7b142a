//! # tabledown
//!
//! HTML table conversion to Markdown pipe tables, with a preserved-HTML
//! fallback for tables Markdown cannot express.
//!
//! Structurally simple tables become clean pipe tables; tables holding code
//! blocks, lists, headings, rules or blockquotes are kept as raw markup
//! inside a scroll-wrapper `div`; degenerate tables (a lone cell, layout
//! tables around other tables) are flattened into sequential blocks.
//!
//! ## Quick Start
//!
//! ```
//! use tabledown::{render, DomTree};
//!
//! fn main() -> tabledown::Result<()> {
//!     let mut tree = DomTree::new();
//!     let table = tree.append_element(tree.root(), "table");
//!     let header = tree.append_element(table, "tr");
//!     for title in ["Name", "Value"] {
//!         let th = tree.append_element(header, "th");
//!         tree.append_text(th, title);
//!     }
//!     let row = tree.append_element(table, "tr");
//!     for value in ["Foo", "Bar"] {
//!         let td = tree.append_element(row, "td");
//!         tree.append_text(td, value);
//!     }
//!
//!     let markdown = render(&tree)?;
//!     assert_eq!(markdown, "| Name | Value |\n| --- | --- |\n| Foo | Bar |");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **model**: read-only document tree over an index arena
//! - **classify**: the Skip / Markdown / Html decision plus its per-render cache
//! - **render**: alignment resolution, cell escaping, row/table assembly
//! - **engine**: the lightweight traversal host (`add_rule` / `keep`)
//! - **rules**: the table rules and companion substitution rules

pub mod classify;
pub mod engine;
pub mod error;
pub mod model;
pub mod render;
pub mod rules;

// Re-export commonly used types
pub use classify::{classify, is_code_block, Classification, ClassificationCache};
pub use engine::{RenderContext, Rule, Ruleset};
pub use error::{Error, Result};
pub use model::{Alignment, CellKind, DomTree, Node, NodeId, NodeKind, RowGroupKind};
pub use render::{
    is_heading_row, render_cell, resolve_column_alignment, RenderOptions, WRAPPER_CLASS,
};

/// Render a document tree to Markdown with default options.
pub fn render(tree: &DomTree) -> Result<String> {
    render_with_options(tree, &RenderOptions::default())
}

/// Render a document tree to Markdown with custom options.
///
/// Builds a fresh [`Ruleset`] with every rule set registered and a fresh
/// per-pass classification cache; nothing is shared across calls.
pub fn render_with_options(tree: &DomTree, options: &RenderOptions) -> Result<String> {
    let mut ruleset = Ruleset::new();
    rules::gfm(&mut ruleset);
    ruleset.render(tree, options)
}
