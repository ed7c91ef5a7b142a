//! Single-cell rendering: escaping, padding, colspan expansion.

use crate::model::{DomTree, NodeId};
use regex::Regex;
use std::sync::LazyLock;

/// Minimum visual width of a rendered cell.
const MIN_CELL_WIDTH: usize = 3;

/// Runs of literal pipes collapse to one escaped pipe so they cannot be
/// mistaken for column separators.
static PIPE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|+").expect("hardcoded regex is valid"));

/// Render one cell segment from its already-rendered content.
///
/// `cell` is the cell node when one exists at this position; synthesized
/// border cells for columns absent from a row pass `None`. `index` overrides
/// the column position; when absent it defaults to the cell's position among
/// its row's children. First-column segments carry the opening pipe, and
/// every segment ends with the pipe that also opens the next column.
pub fn render_cell(
    tree: &DomTree,
    content: &str,
    cell: Option<NodeId>,
    index: Option<usize>,
) -> String {
    let index = index
        .or_else(|| cell.map(|id| tree.sibling_index(id)))
        .unwrap_or(0);
    let prefix = if index == 0 { "| " } else { " " };

    let mut text = content
        .trim()
        .replace("\r\n", "\n")
        .replace("\n\r", "\n")
        .replace('\n', "<br>");
    text = PIPE_RUN.replace_all(&text, "\\|").into_owned();
    while text.chars().count() < MIN_CELL_WIDTH {
        text.push(' ');
    }

    // A spanning cell still occupies its full logical width: one empty
    // synthetic segment per extra column keeps downstream column counting
    // consistent with the table's rendered width.
    if let Some(id) = cell {
        for _ in 1..tree.node(id).colspan() {
            text.push_str(" | ");
            text.push_str(&" ".repeat(MIN_CELL_WIDTH));
        }
    }

    format!("{prefix}{text} |")
}
