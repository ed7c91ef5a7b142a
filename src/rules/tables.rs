//! Table rule registrations.

use crate::classify::Classification;
use crate::engine::Ruleset;
use crate::model::NodeKind;
use crate::render::{render_table, render_table_cell, render_table_row};

/// Register the table rules and the keep predicate for preserved tables.
///
/// The `table` rule handles the preserved-HTML branch itself; the keep
/// predicate covers hosts that run their own rule set without it, so complex
/// tables are still emitted verbatim rather than mangled.
pub fn register(rules: &mut Ruleset) {
    rules.add_rule(
        "table_cell",
        |ctx, id| ctx.tree.node(id).kind.is_cell(),
        |ctx, id, content| render_table_cell(ctx, id, content),
    );

    rules.add_rule(
        "table_row",
        |ctx, id| ctx.tree.node(id).kind == NodeKind::Row,
        |ctx, id, content| render_table_row(ctx, id, content),
    );

    rules.add_rule(
        "table",
        |ctx, id| ctx.tree.node(id).kind == NodeKind::Table,
        |ctx, id, content| render_table(ctx, id, content),
    );

    rules.add_rule(
        "table_caption",
        |ctx, id| ctx.tree.node(id).kind == NodeKind::Caption,
        |_, _, _| String::new(),
    );

    rules.add_rule(
        "table_colgroup",
        |ctx, id| ctx.tree.node(id).kind == NodeKind::ColGroup,
        |_, _, _| String::new(),
    );

    rules.add_rule(
        "table_section",
        |ctx, id| matches!(ctx.tree.node(id).kind, NodeKind::RowGroup(_)),
        |_, _, content| content.to_string(),
    );

    rules.keep(|ctx, id| {
        ctx.tree.node(id).kind == NodeKind::Table
            && ctx.classification(id) == Classification::Html
    });
}
