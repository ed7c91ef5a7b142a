//! Rule sets for the traversal host.

pub mod code_block;
pub mod strikethrough;
pub mod tables;
pub mod task_list;

use crate::engine::Ruleset;

/// Register every rule set: tables plus the companion substitution rules.
pub fn gfm(rules: &mut Ruleset) {
    code_block::register(rules);
    strikethrough::register(rules);
    tables::register(rules);
    task_list::register(rules);
}
