//! Document model: node arena and table-related types.

mod node;
mod tree;

pub use node::{CellKind, Node, NodeId, NodeKind, RowGroupKind};
pub use tree::DomTree;

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a table column or cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// No alignment hint.
    #[default]
    None,
    /// Left-aligned.
    Left,
    /// Right-aligned.
    Right,
    /// Centered.
    Center,
}

impl Alignment {
    /// Parse an alignment hint, case-insensitively. Anything other than
    /// `left`, `right` or `center` maps to [`Alignment::None`].
    pub fn parse(value: &str) -> Alignment {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Alignment::Left,
            "right" => Alignment::Right,
            "center" => Alignment::Center,
            _ => Alignment::None,
        }
    }

    /// The border-row marker encoding this alignment.
    pub fn border_marker(&self) -> &'static str {
        match self {
            Alignment::None => "---",
            Alignment::Left => ":---",
            Alignment::Right => "---:",
            Alignment::Center => ":---:",
        }
    }
}
