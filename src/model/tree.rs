//! Arena-backed document tree.
//!
//! The host's parser normally produces this tree; tests and embedders build
//! it through the `append_*` methods. During rendering the tree is strictly
//! read-only: the core only derives strings and cache entries from it.

use super::{CellKind, Node, NodeId, NodeKind};
use crate::error::{Error, Result};

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["br", "col", "hr", "img", "input", "meta", "wbr"];

/// A read-only document tree over an index arena.
///
/// Node identity is the arena index, which makes [`NodeId`] a stable cache
/// key for the duration of the tree's lifetime. Parent links are back
/// references by index, so the cyclic parent/child shape of a DOM never
/// turns into ownership cycles.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree containing only the document root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                tag: String::new(),
                attrs: Vec::new(),
                text: String::new(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The document root.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the arena, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds nothing besides the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Access a node. Panics on an identifier from another tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Fallible node access for identifiers of unknown provenance.
    pub fn try_node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(Error::InvalidNode(id))
    }

    /// Append an element node under `parent` and return its id.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        self.append(parent, Node::element(tag, &[]))
    }

    /// Append an element node with attributes under `parent`.
    pub fn append_element_with_attrs(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> NodeId {
        self.append(parent, Node::element(tag, attrs))
    }

    /// Append a text node under `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.append(parent, Node::text(text))
    }

    fn append(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Ordered children of a node.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Parent of a node, if any.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The sibling immediately before `id` under its parent.
    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|&c| c == id)?;
        pos.checked_sub(1).map(|i| siblings[i])
    }

    /// Position of `id` among its parent's children; 0 for the root.
    pub fn sibling_index(&self, id: NodeId) -> usize {
        self.parent(id)
            .and_then(|p| self.children(p).iter().position(|&c| c == id))
            .unwrap_or(0)
    }

    /// Nearest ancestor that is a table, if the node sits inside one.
    pub fn ancestor_table(&self, id: NodeId) -> Option<NodeId> {
        self.ancestor_matching(id, |n| n.kind == NodeKind::Table)
    }

    /// Nearest ancestor `div`, if any.
    pub fn ancestor_div(&self, id: NodeId) -> Option<NodeId> {
        self.ancestor_matching(id, |n| n.tag == "div")
    }

    fn ancestor_matching(&self, id: NodeId, pred: impl Fn(&Node) -> bool) -> Option<NodeId> {
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if pred(self.node(ancestor)) {
                return Some(ancestor);
            }
            current = self.parent(ancestor);
        }
        None
    }

    /// All rows of a table in document order, whether direct children or
    /// nested inside row groups. Rows of nested tables are not included.
    pub fn table_rows(&self, table: NodeId) -> Vec<NodeId> {
        let mut rows = Vec::new();
        for &child in self.children(table) {
            match self.node(child).kind {
                NodeKind::Row => rows.push(child),
                NodeKind::RowGroup(_) => {
                    for &grandchild in self.children(child) {
                        if self.node(grandchild).kind == NodeKind::Row {
                            rows.push(grandchild);
                        }
                    }
                }
                _ => {}
            }
        }
        rows
    }

    /// Cells of a row in document order.
    pub fn row_cells(&self, row: NodeId) -> Vec<NodeId> {
        self.children(row)
            .iter()
            .copied()
            .filter(|&c| self.node(c).kind.is_cell())
            .collect()
    }

    /// Column count of a table: the maximum cell count across its rows.
    /// Shorter rows are treated as missing trailing cells.
    pub fn column_count(&self, table: NodeId) -> usize {
        self.table_rows(table)
            .iter()
            .map(|&row| self.row_cells(row).len())
            .max()
            .unwrap_or(0)
    }

    /// Trimmed caption text of a table, if it has a non-empty caption.
    pub fn caption_text(&self, table: NodeId) -> Option<String> {
        self.children(table)
            .iter()
            .find(|&&c| self.node(c).kind == NodeKind::Caption)
            .map(|&c| self.text_content(c).trim().to_string())
            .filter(|text| !text.is_empty())
    }

    /// Whether a row's cells are all heading cells. True for empty rows.
    pub fn all_heading_cells(&self, row: NodeId) -> bool {
        self.children(row)
            .iter()
            .all(|&c| self.node(c).kind == NodeKind::Cell(CellKind::Heading))
    }

    /// Concatenated text of a node's subtree.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        if node.kind == NodeKind::Text {
            out.push_str(&node.text);
        }
        for &child in &node.children {
            self.collect_text(child, out);
        }
    }

    /// Serialize a node back to markup, used for the preserved-HTML path.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.serialize(id, &mut out);
        out
    }

    fn serialize(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        match node.kind {
            NodeKind::Text => out.push_str(&escape_text(&node.text)),
            NodeKind::Document => {
                for &child in &node.children {
                    self.serialize(child, out);
                }
            }
            _ => {
                out.push('<');
                out.push_str(&node.tag);
                for (name, value) in &node.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
                out.push('>');
                if VOID_TAGS.contains(&node.tag.as_str()) {
                    return;
                }
                for &child in &node.children {
                    self.serialize(child, out);
                }
                out.push_str("</");
                out.push_str(&node.tag);
                out.push('>');
            }
        }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
