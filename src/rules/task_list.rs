//! Task-list rule: checkbox inputs inside list items become `[ ]` / `[x]`.

use crate::engine::Ruleset;

pub fn register(rules: &mut Ruleset) {
    rules.add_rule(
        "task_list_item",
        |ctx, id| {
            let node = ctx.tree.node(id);
            node.tag == "input"
                && node
                    .attr("type")
                    .map(|t| t.eq_ignore_ascii_case("checkbox"))
                    .unwrap_or(false)
                && ctx
                    .tree
                    .parent(id)
                    .map(|p| ctx.tree.node(p).tag == "li")
                    .unwrap_or(false)
        },
        |ctx, id, _| {
            if ctx.tree.node(id).attr("checked").is_some() {
                "[x] ".to_string()
            } else {
                "[ ] ".to_string()
            }
        },
    );
}
