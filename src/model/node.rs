//! Node types for the document tree.

use super::Alignment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a node inside a [`DomTree`](super::DomTree).
///
/// Identifiers are arena indices: cheap to copy, stable for the lifetime of
/// the tree, and usable as cache keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Distinguishes the three row-group containers of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowGroupKind {
    /// `thead`
    Head,
    /// `tbody`
    Body,
    /// `tfoot`
    Foot,
}

/// Distinguishes heading cells (`th`) from data cells (`td`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    /// `th`
    Heading,
    /// `td`
    Data,
}

/// Tagged union of node kinds.
///
/// Table structure gets dedicated variants so the renderer can dispatch
/// without tag-name string matching; everything else is a generic element
/// or a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of the tree.
    Document,
    /// `table`
    Table,
    /// `thead` / `tbody` / `tfoot`
    RowGroup(RowGroupKind),
    /// `tr`
    Row,
    /// `th` / `td`
    Cell(CellKind),
    /// `caption`
    Caption,
    /// `colgroup` / `col`
    ColGroup,
    /// Any other element.
    Element,
    /// A text node.
    Text,
}

impl NodeKind {
    /// Map a lowercase tag name to its node kind.
    pub fn from_tag(tag: &str) -> NodeKind {
        match tag {
            "table" => NodeKind::Table,
            "thead" => NodeKind::RowGroup(RowGroupKind::Head),
            "tbody" => NodeKind::RowGroup(RowGroupKind::Body),
            "tfoot" => NodeKind::RowGroup(RowGroupKind::Foot),
            "tr" => NodeKind::Row,
            "th" => NodeKind::Cell(CellKind::Heading),
            "td" => NodeKind::Cell(CellKind::Data),
            "caption" => NodeKind::Caption,
            "colgroup" | "col" => NodeKind::ColGroup,
            _ => NodeKind::Element,
        }
    }

    /// Whether this kind is a table cell.
    pub fn is_cell(&self) -> bool {
        matches!(self, NodeKind::Cell(_))
    }
}

/// A single node in the document tree.
///
/// Parent and child links are arena indices held by the owning
/// [`DomTree`](super::DomTree); nodes never own each other.
#[derive(Debug, Clone)]
pub struct Node {
    /// Structural kind of the node.
    pub kind: NodeKind,

    /// Lowercase tag name; empty for text nodes.
    pub tag: String,

    /// Ordered attribute list as it appeared in the source.
    pub attrs: Vec<(String, String)>,

    /// Text content for [`NodeKind::Text`] nodes; empty otherwise.
    pub text: String,

    /// Parent node, if any.
    pub parent: Option<NodeId>,

    /// Ordered children.
    pub children: Vec<NodeId>,
}

impl Node {
    /// Create an element node from a tag name and attributes.
    pub fn element(tag: &str, attrs: &[(&str, &str)]) -> Self {
        let tag = tag.to_ascii_lowercase();
        Self {
            kind: NodeKind::from_tag(&tag),
            tag,
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
                .collect(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create a text node.
    pub fn text(content: &str) -> Self {
        Self {
            kind: NodeKind::Text,
            tag: String::new(),
            attrs: Vec::new(),
            text: content.to_string(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by (case-insensitive) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether the node's `class` attribute contains the given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|list| list.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Read a property from the inline `style` attribute.
    pub fn style_property(&self, name: &str) -> Option<&str> {
        let style = self.attr("style")?;
        for declaration in style.split(';') {
            if let Some((key, value)) = declaration.split_once(':') {
                if key.trim().eq_ignore_ascii_case(name) {
                    return Some(value.trim());
                }
            }
        }
        None
    }

    /// Cell alignment from the `align` attribute, falling back to the inline
    /// `text-align` style. Unrecognized values map to [`Alignment::None`].
    pub fn alignment(&self) -> Alignment {
        let raw = self
            .attr("align")
            .filter(|v| !v.is_empty())
            .or_else(|| self.style_property("text-align"));
        raw.map(Alignment::parse).unwrap_or(Alignment::None)
    }

    /// Colspan count for a cell. Absent or malformed values count as 1.
    pub fn colspan(&self) -> usize {
        self.attr("colspan")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&n| n >= 1)
            .unwrap_or(1)
    }
}
