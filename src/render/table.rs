//! Row and table assembly: heading detection, border synthesis, and the
//! three output shapes (pipe table, flattened blocks, preserved HTML).

use super::align::resolve_column_alignment;
use super::cell::render_cell;
use crate::classify::Classification;
use crate::engine::RenderContext;
use crate::model::{DomTree, NodeId, NodeKind, RowGroupKind};
use regex::Regex;
use std::sync::LazyLock;

/// Marker class on the scroll-container `div` wrapping preserved tables.
pub const WRAPPER_CLASS: &str = "tabledown-table-wrapper";

/// A header border line: a pipe, then an optional colon, then dashes.
static DIVIDER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\| :?---").expect("hardcoded regex is valid"));

/// Runs of newlines inside accumulated table content.
static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("hardcoded regex is valid"));

/// Whether a row is the table's heading row.
///
/// True when the row's group is the header group, or when the row is the
/// first child of the table itself (or of the first body group, tolerating a
/// preceding empty header group) and every one of its cells is a heading
/// cell.
pub fn is_heading_row(tree: &DomTree, row: NodeId) -> bool {
    let Some(parent) = tree.parent(row) else {
        return false;
    };
    let parent_kind = tree.node(parent).kind;
    if parent_kind == NodeKind::RowGroup(RowGroupKind::Head) {
        return true;
    }
    tree.children(parent).first() == Some(&row)
        && (parent_kind == NodeKind::Table || is_first_body_group(tree, parent))
        && tree.all_heading_cells(row)
}

fn is_first_body_group(tree: &DomTree, group: NodeId) -> bool {
    if tree.node(group).kind != NodeKind::RowGroup(RowGroupKind::Body) {
        return false;
    }
    match tree.previous_sibling(group) {
        None => true,
        Some(prev) => {
            tree.node(prev).kind == NodeKind::RowGroup(RowGroupKind::Head)
                && tree.text_content(prev).trim().is_empty()
        }
    }
}

/// Render a cell of a table, or pass its content through when the enclosing
/// table is flattened.
pub fn render_table_cell(ctx: &RenderContext, cell: NodeId, content: &str) -> String {
    let Some(table) = ctx.tree.ancestor_table(cell) else {
        return content.to_string();
    };
    if ctx.classification(table) == Classification::Skip {
        return content.to_string();
    }
    render_cell(ctx.tree, content, Some(cell), None)
}

/// Render a row: its assembled cell content, plus a border row beneath it
/// when the row is the table's heading row. The border spans the full
/// resolved column count even for columns this row does not have.
pub fn render_table_row(ctx: &RenderContext, row: NodeId, content: &str) -> String {
    let tree = ctx.tree;
    let Some(table) = tree.ancestor_table(row) else {
        return content.to_string();
    };
    if ctx.classification(table) == Classification::Skip {
        return content.to_string();
    }

    let mut border_cells = String::new();
    if is_heading_row(tree, row) {
        let column_count = tree.column_count(table);
        let cells = tree.row_cells(row);
        for column in 0..column_count {
            let cell = cells.get(column).copied();
            let border = resolve_column_alignment(tree, table, column).border_marker();
            border_cells.push_str(&render_cell(tree, border, cell, Some(column)));
        }
    }

    if border_cells.is_empty() {
        format!("\n{content}")
    } else {
        format!("\n{content}\n{border_cells}")
    }
}

/// Final table assembly, branching on the cached classification.
pub fn render_table(ctx: &RenderContext, table: NodeId, content: &str) -> String {
    match ctx.classification(table) {
        Classification::Html => render_preserved(ctx.tree, table),
        Classification::Skip => content.to_string(),
        Classification::Markdown => render_markdown(ctx.tree, table, content),
    }
}

/// Serialize the table back to markup inside the scroll-wrapper `div`,
/// unless the nearest `div` ancestor already is that wrapper.
fn render_preserved(tree: &DomTree, table: NodeId) -> String {
    let html = tree.outer_html(table);
    let already_wrapped = tree
        .ancestor_div(table)
        .map(|div| tree.node(div).has_class(WRAPPER_CLASS))
        .unwrap_or(false);
    if already_wrapped {
        html
    } else {
        format!("\n\n<div class=\"{WRAPPER_CLASS}\">{html}</div>\n\n")
    }
}

fn render_markdown(tree: &DomTree, table: NodeId, content: &str) -> String {
    // Blank lines inside a pipe table would split it in two.
    let content = NEWLINE_RUN.replace_all(content, "\n");

    // A table with a native heading row already carries its border on the
    // second line; otherwise synthesize an empty header so the result is a
    // valid pipe table.
    let trimmed = content.trim();
    let mut lines = trimmed.lines();
    let first_line = lines.next().unwrap_or("");
    let second_line = lines.next().unwrap_or(first_line);
    let has_divider = DIVIDER_LINE.is_match(second_line);

    let column_count = tree.column_count(table);
    let mut header = String::new();
    if column_count > 0 && !has_divider {
        header.push('|');
        header.push_str(&"     |".repeat(column_count));
        header.push_str("\n|");
        for column in 0..column_count {
            header.push(' ');
            header.push_str(resolve_column_alignment(tree, table, column).border_marker());
            header.push_str(" |");
        }
    }

    let caption = tree
        .caption_text(table)
        .map(|text| format!("{text}\n\n"))
        .unwrap_or_default();
    let body = format!("{header}{content}");
    format!("\n\n{caption}{}\n\n", body.trim_start())
}
