//! Rewrite result type.

use reform_syntax::Node;

/// Result of offering a node to a rule.
///
/// Nodes move through rules by value, so the unchanged case hands the node
/// back to the walker.
#[derive(Debug)]
pub enum RewriteResult {
    /// The rule did not apply; here is the node, as it was.
    Unchanged(Node),
    /// The rule replaced the node.
    Replace(Node),
}
