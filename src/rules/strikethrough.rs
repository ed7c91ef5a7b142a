//! Strikethrough rule: `del`, `s` and `strike` become `~~text~~`.

use crate::engine::Ruleset;

pub fn register(rules: &mut Ruleset) {
    rules.add_rule(
        "strikethrough",
        |ctx, id| matches!(ctx.tree.node(id).tag.as_str(), "del" | "s" | "strike"),
        |_, _, content| format!("~~{content}~~"),
    );
}
