//! Highlighted-code-block rule.
//!
//! Syntax highlighters wrap code in a `div` with a class like
//! `highlight-source-js` around a `pre`; the rule extracts the raw text and
//! language into a fenced code block.

use crate::classify::highlighted_block_language;
use crate::engine::Ruleset;

pub fn register(rules: &mut Ruleset) {
    rules.add_rule(
        "highlighted_code_block",
        |ctx, id| highlighted_block_language(ctx.tree, id).is_some(),
        |ctx, id, _| {
            let language = highlighted_block_language(ctx.tree, id).unwrap_or_default();
            let code = ctx
                .tree
                .children(id)
                .first()
                .map(|&pre| ctx.tree.text_content(pre))
                .unwrap_or_default();
            let fence = &ctx.options.fence;
            format!("\n\n{fence}{language}\n{code}\n{fence}\n\n")
        },
    );
}
