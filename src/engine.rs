//! Lightweight traversal host: rule registration and bottom-up rendering.
//!
//! This is the seam a full conversion engine would occupy. It walks the tree
//! depth-first, renders children before parents, and hands the concatenated
//! child content to the first matching rule. Nodes matched by a `keep`
//! predicate are preserved verbatim as markup; everything else falls through
//! to trivial defaults (text nodes emit their text, elements pass their
//! child content up). All Markdown knowledge lives in the registered rules.

use crate::classify::{classify, Classification, ClassificationCache};
use crate::error::Result;
use crate::model::{DomTree, NodeId, NodeKind};
use crate::render::RenderOptions;
use regex::Regex;
use std::cell::RefCell;
use std::sync::LazyLock;

/// Three or more newlines collapse to one blank line in the final output.
static EXCESS_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("hardcoded regex is valid"));

/// Per-render state threaded into every rule.
///
/// Built fresh for each top-level render call, so the classification cache
/// can never leak entries across unrelated documents. The cache sits behind
/// a `RefCell` because rendering is strictly single-threaded.
pub struct RenderContext<'a> {
    /// The tree being rendered.
    pub tree: &'a DomTree,
    /// Options for this render pass.
    pub options: &'a RenderOptions,
    cache: RefCell<ClassificationCache>,
}

impl<'a> RenderContext<'a> {
    /// Create a context for one render pass.
    pub fn new(tree: &'a DomTree, options: &'a RenderOptions) -> Self {
        Self {
            tree,
            options,
            cache: RefCell::new(ClassificationCache::new()),
        }
    }

    /// Cached classification of a table. Computed at most once per table
    /// per render pass.
    pub fn classification(&self, table: NodeId) -> Classification {
        self.cache
            .borrow_mut()
            .get_or_compute(table, || classify(self.tree, table, self.options))
    }
}

type MatchFn = dyn Fn(&RenderContext, NodeId) -> bool;
type RenderFn = dyn Fn(&RenderContext, NodeId, &str) -> String;
type KeepFn = dyn Fn(&RenderContext, NodeId) -> bool;

/// A named rule: a match predicate plus a renderer taking already-rendered
/// child content.
pub struct Rule {
    name: String,
    matches: Box<MatchFn>,
    render: Box<RenderFn>,
}

impl Rule {
    /// Rule name, for diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An ordered set of rules plus keep predicates.
///
/// Rules are consulted in registration order and take precedence over keep
/// predicates; a kept node is emitted as its original markup without
/// descending further into its rendered content.
#[derive(Default)]
pub struct Ruleset {
    rules: Vec<Rule>,
    keeps: Vec<Box<KeepFn>>,
}

impl Ruleset {
    /// Create an empty ruleset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule.
    pub fn add_rule(
        &mut self,
        name: &str,
        matches: impl Fn(&RenderContext, NodeId) -> bool + 'static,
        render: impl Fn(&RenderContext, NodeId, &str) -> String + 'static,
    ) {
        self.rules.push(Rule {
            name: name.to_string(),
            matches: Box::new(matches),
            render: Box::new(render),
        });
    }

    /// Register a keep predicate: matching nodes are preserved verbatim as
    /// raw markup instead of being converted.
    pub fn keep(&mut self, predicate: impl Fn(&RenderContext, NodeId) -> bool + 'static) {
        self.keeps.push(Box::new(predicate));
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Render a whole tree with a fresh per-pass context.
    pub fn render(&self, tree: &DomTree, options: &RenderOptions) -> Result<String> {
        let ctx = RenderContext::new(tree, options);
        let output = self.render_node(&ctx, tree.root())?;
        let output = EXCESS_BLANK_LINES.replace_all(&output, "\n\n");
        Ok(output.trim().to_string())
    }

    /// Render a single node bottom-up.
    pub fn render_node(&self, ctx: &RenderContext, id: NodeId) -> Result<String> {
        let node = ctx.tree.try_node(id)?;
        if node.kind == NodeKind::Text {
            return Ok(node.text.clone());
        }

        let mut content = String::new();
        for &child in &node.children {
            content.push_str(&self.render_node(ctx, child)?);
        }

        for rule in &self.rules {
            if (rule.matches)(ctx, id) {
                log::trace!("rule '{}' matched node {id}", rule.name());
                return Ok((rule.render)(ctx, id, &content));
            }
        }
        if self.keeps.iter().any(|keep| keep(ctx, id)) {
            return Ok(ctx.tree.outer_html(id));
        }
        Ok(content)
    }
}
