//! Table classification: Markdown conversion, flattening, or preserved HTML.
//!
//! Classification is consulted by every cell and row renderer of a table, so
//! a single table is looked up once per descendant during a traversal. The
//! per-render [`ClassificationCache`] collapses those repeated subtree walks
//! to one computation per table.

use crate::model::{DomTree, NodeId, NodeKind};
use crate::render::RenderOptions;
use log::{debug, trace};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Container classes recognized as syntax-highlighted code blocks,
/// e.g. `highlight-source-js` or `highlight-text-html-basic`.
static HIGHLIGHT_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"highlight-(?:text|source)-([a-z0-9]+)").expect("hardcoded regex is valid")
});

/// Block-structural tags that cannot live inside a Markdown pipe table.
const BLOCK_TAGS: &[&str] = &[
    "ul",
    "ol",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "blockquote",
];

/// How a table should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Render the table's cells sequentially as independent blocks, with no
    /// pipe syntax and no wrapping.
    Skip,
    /// Render as a Markdown pipe table.
    Markdown,
    /// Preserve the original markup, wrapped for horizontal scrolling.
    Html,
}

/// Decide how a table should be rendered.
///
/// The Html check runs before the Skip check; a table matching both triggers
/// (a single-cell table holding a code block, say) is preserved as HTML.
/// That order is load-bearing and must not be folded into one rule.
pub fn classify(tree: &DomTree, table: NodeId, options: &RenderOptions) -> Classification {
    let result = if requires_html(tree, table, options) {
        Classification::Html
    } else if should_skip(tree, table) {
        Classification::Skip
    } else {
        Classification::Markdown
    };
    debug!("table {table} classified as {result:?}");
    result
}

/// Tables holding content a pipe table cannot express stay HTML: code blocks,
/// lists, headings, rules, blockquotes anywhere in the subtree, and nested
/// tables when the option asks for them to be preserved.
fn requires_html(tree: &DomTree, table: NodeId, options: &RenderOptions) -> bool {
    subtree_any(tree, table, |id| {
        if is_code_block(tree, id) {
            return true;
        }
        let node = tree.node(id);
        if BLOCK_TAGS.contains(&node.tag.as_str()) {
            return true;
        }
        options.preserve_nested_tables && node.kind == NodeKind::Table
    })
}

/// A table is flattened when a pipe table would add nothing: a lone cell, or
/// a layout table that itself contains tables. The nested-table case is only
/// reachable when `preserve_nested_tables` is off, since `requires_html`
/// intercepts it otherwise.
fn should_skip(tree: &DomTree, table: NodeId) -> bool {
    let rows = tree.table_rows(table);
    if rows.len() == 1 && tree.row_cells(rows[0]).len() <= 1 {
        return true;
    }
    subtree_any(tree, table, |id| tree.node(id).kind == NodeKind::Table)
}

/// Whether a node renders as a code block: a `pre` element, or a highlighted
/// container (`div` with a `highlight-source-*`/`highlight-text-*` class
/// whose first child is a `pre`).
pub fn is_code_block(tree: &DomTree, id: NodeId) -> bool {
    tree.node(id).tag == "pre" || highlighted_block_language(tree, id).is_some()
}

/// The language of a highlighted code block container, if `id` is one.
pub(crate) fn highlighted_block_language(tree: &DomTree, id: NodeId) -> Option<String> {
    let node = tree.node(id);
    if node.tag != "div" {
        return None;
    }
    let class = node.attr("class")?;
    let language = HIGHLIGHT_CLASS.captures(class)?.get(1)?.as_str().to_string();
    let first_child = *tree.children(id).first()?;
    (tree.node(first_child).tag == "pre").then_some(language)
}

/// Depth-first scan of a node's descendants. The root itself is not tested.
fn subtree_any(tree: &DomTree, root: NodeId, pred: impl Fn(NodeId) -> bool) -> bool {
    let mut stack: Vec<NodeId> = tree.children(root).to_vec();
    while let Some(id) = stack.pop() {
        if pred(id) {
            return true;
        }
        stack.extend_from_slice(tree.children(id));
    }
    false
}

/// Memoized per-table classification, keyed by node identity.
///
/// One cache lives for exactly one render pass; the engine builds a fresh one
/// per top-level render call, so entries never leak across documents and no
/// eviction is needed.
#[derive(Debug, Default)]
pub struct ClassificationCache {
    entries: HashMap<NodeId, Classification>,
}

impl ClassificationCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the cached classification for `table`, computing and storing
    /// it on first use.
    pub fn get_or_compute(
        &mut self,
        table: NodeId,
        compute: impl FnOnce() -> Classification,
    ) -> Classification {
        if let Some(&cached) = self.entries.get(&table) {
            trace!("classification cache hit for table {table}");
            return cached;
        }
        let result = compute();
        self.entries.insert(table, result);
        result
    }
}
