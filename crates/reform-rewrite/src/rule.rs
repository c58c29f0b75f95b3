//! Rewrite rule trait.
//!
//! A rule is a predicate plus a transform over one node kind. The walker
//! offers each rebuilt node to the rules registered for its kind; the rule
//! never recurses on its own.

use reform_syntax::{Language, Node, NodeTag};

use super::error::RewriteOutcome;
use super::result::RewriteResult;

/// Catalog metadata for a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleInfo {
    /// Stable name used to select the rule.
    pub name: &'static str,
    /// One-line human-readable description.
    pub description: &'static str,
    /// Relative execution order; lower runs first.
    pub order: u32,
    /// Languages the rule applies to.
    pub languages: &'static [Language],
}

impl RuleInfo {
    pub fn supports(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }
}

/// A rule that can match and rewrite one kind of node.
///
/// # Example
///
/// ```ignore
/// struct DropParens;
///
/// impl RewriteRule for DropParens {
///     fn info(&self) -> &RuleInfo { &DROP_PARENS }
///     fn target(&self) -> NodeTag { NodeTag::Parenthesized }
///
///     fn matches(&self, node: &Node) -> bool {
///         node.tag() == NodeTag::Parenthesized
///     }
///
///     fn transform(&self, node: Node) -> RewriteOutcome<Node> {
///         let id = node.id;
///         match node.into_kind() {
///             NodeKind::Parenthesized(inner) => Ok(inner.with_id(id)),
///             other => Err(RewriteError::shape_mismatch(
///                 "DropParens", "a parenthesized expression", other.tag())),
///         }
///     }
/// }
/// ```
pub trait RewriteRule: Send + Sync {
    fn info(&self) -> &RuleInfo;

    /// The node kind this rule is registered for.
    fn target(&self) -> NodeTag;

    /// Check the full shape the transform relies on.
    ///
    /// The walker only calls [`transform`](Self::transform) on nodes this
    /// accepts, so every assumption the transform makes must be checked here.
    fn matches(&self, node: &Node) -> bool;

    /// Produce the replacement for a node.
    ///
    /// Called directly on a node [`matches`](Self::matches) rejects, this
    /// returns [`RewriteError::ShapeMismatch`](super::RewriteError::ShapeMismatch)
    /// instead of building a malformed tree.
    fn transform(&self, node: Node) -> RewriteOutcome<Node>;

    /// Attempt to match and rewrite a node.
    ///
    /// # Panics
    ///
    /// Panics if the transform rejects a node the predicate accepted: the
    /// rule's predicate and transform disagree, which is a bug in the rule.
    fn match_and_rewrite(&self, node: Node) -> RewriteResult {
        if !self.matches(&node) {
            return RewriteResult::Unchanged(node);
        }
        match self.transform(node) {
            Ok(replacement) => RewriteResult::Replace(replacement),
            Err(err) => panic!(
                "predicate of `{}` admitted a node its transform rejects: {err}",
                self.info().name
            ),
        }
    }

    fn name(&self) -> &'static str {
        self.info().name
    }
}
