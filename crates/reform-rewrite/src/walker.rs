//! Post-order tree walker.
//!
//! The walker is the only part of the engine that recurses. For every node
//! it rebuilds the children first, in source order, and then offers the
//! rebuilt node to each rule registered for its kind, so a rule always sees
//! children that have already been rewritten.

use reform_syntax::{Node, SyntaxRole};

use super::context::RewriteContext;
use super::result::RewriteResult;
use super::rule::RewriteRule;

/// Drives one traversal with a fixed, ordered set of rules.
///
/// # Example
///
/// ```ignore
/// let rules = RuleSet::builtin();
/// let walker = Walker::new(rules.iter());
///
/// let mut ctx = RewriteContext::new();
/// let root = walker.visit(root, &mut ctx);
/// println!("{} replacements", ctx.changes_made());
/// ```
pub struct Walker<'r> {
    rules: Vec<&'r dyn RewriteRule>,
}

impl<'r> Walker<'r> {
    pub fn new(rules: impl IntoIterator<Item = &'r dyn RewriteRule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Rewrite a subtree.
    ///
    /// Nodes no rule touches, and whose descendants no rule touches, come
    /// back structurally identical.
    pub fn visit(&self, node: Node, ctx: &mut RewriteContext) -> Node {
        let node = node.map_children(|child| self.visit(child, ctx));
        self.apply_rules(node, ctx)
    }

    /// Offer a node whose children are already rewritten to each rule.
    ///
    /// Rules run in order. A rule registered for a different kind is
    /// skipped, and once a rule replaces the node, later rules see the
    /// replacement. The replacement is never visited again in this pass.
    fn apply_rules(&self, mut node: Node, ctx: &mut RewriteContext) -> Node {
        for rule in &self.rules {
            if rule.target() != node.tag() {
                continue;
            }

            let id = node.id;
            let role = node.role();
            match rule.match_and_rewrite(node) {
                RewriteResult::Unchanged(unchanged) => {
                    tracing::trace!(rule = rule.name(), node = %id, "rule did not match");
                    node = unchanged;
                }
                RewriteResult::Replace(replacement) => {
                    assert!(
                        role == SyntaxRole::Unknown || replacement.role() == role,
                        "rule `{}` replaced {role} node {id} with {} node",
                        rule.name(),
                        replacement.role(),
                    );
                    tracing::debug!(rule = rule.name(), node = %id, "rewrote node");
                    ctx.record_change(rule.name());
                    node = replacement;
                }
            }
        }
        node
    }
}
