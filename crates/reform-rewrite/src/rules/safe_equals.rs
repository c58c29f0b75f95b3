//! Equality rewrites.
//!
//! ```text
//! a == b        →  a.SafeEquals(b)
//! a != b        →  a.SafeNotEquals(b)
//! x = a == b    →  x = a.SafeEquals(b)     (binding clause)
//! x = (a == b)  →  x = a.SafeEquals(b)     (binding rule alone)
//! ```
//!
//! When the expression rule runs first, as it does with the built-in order,
//! `x = (a == b)` becomes `x = (a.SafeEquals(b))` and the grouping stays.
//!
//! The receiver is printed as it is, so for `a + b == c` the rewritten tree
//! calls `SafeEquals` on `a + b` but renders as `a + b.SafeEquals(c)`. The
//! text is ambiguous there; the tree is not.
//!
//! The operator is read from the `op` field of the binary node and nothing
//! else, so both the equality and the inequality branch are reachable.

use reform_syntax::builder::build_invocation;
use reform_syntax::{BinaryOp, Language, Node, NodeKind, NodeTag};

use super::super::error::{RewriteError, RewriteOutcome};
use super::super::rule::{RewriteRule, RuleInfo};

/// Helper invoked in place of `==`.
pub const SAFE_EQUALS: &str = "SafeEquals";
/// Helper invoked in place of `!=`.
pub const SAFE_NOT_EQUALS: &str = "SafeNotEquals";

static SAFE_EQUALS_INFO: RuleInfo = RuleInfo {
    name: "SafeEquals",
    description: "Replace usages of == and != with SafeEquals and SafeNotEquals.",
    order: 100,
    languages: &[Language::CSharp],
};

static SAFE_EQUALS_BINDING_INFO: RuleInfo = RuleInfo {
    name: "SafeEqualsBinding",
    description: "Replace an == comparison bound to a name with SafeEquals.",
    order: 110,
    languages: &[Language::CSharp],
};

/// The helper that replaces a comparison operator, if it is one we rewrite.
fn helper_for(op: BinaryOp) -> Option<&'static str> {
    match op {
        BinaryOp::Eq => Some(SAFE_EQUALS),
        BinaryOp::NotEq => Some(SAFE_NOT_EQUALS),
        _ => None,
    }
}

/// Rewrites `==` and `!=` comparisons in expression position.
#[derive(Clone, Copy, Debug, Default)]
pub struct SafeEqualsRule;

impl RewriteRule for SafeEqualsRule {
    fn info(&self) -> &RuleInfo {
        &SAFE_EQUALS_INFO
    }

    fn target(&self) -> NodeTag {
        NodeTag::Binary
    }

    fn matches(&self, node: &Node) -> bool {
        node
            .as_binary()
            .is_some_and(|(op, _, _)| helper_for(op).is_some())
    }

    fn transform(&self, node: Node) -> RewriteOutcome<Node> {
        let id = node.id;
        match node.into_kind() {
            NodeKind::Binary { op, left, right } => {
                let helper = helper_for(op).ok_or_else(|| {
                    RewriteError::shape_mismatch(
                        SAFE_EQUALS_INFO.name,
                        "an == or != comparison",
                        NodeTag::Binary,
                    )
                })?;
                Ok(build_invocation(left, helper, [right]).with_id(id))
            }
            other => Err(RewriteError::shape_mismatch(
                SAFE_EQUALS_INFO.name,
                "an == or != comparison",
                other.tag(),
            )),
        }
    }
}

/// Rewrites the bound value of a binding when it is an `==` comparison.
///
/// Grouping around the comparison is dropped along with it, since the
/// invocation needs none in value position. Only the value is replaced; the
/// binding keeps its name and id. Any other bound value, including one the
/// expression rule already rewrote, is left alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SafeEqualsBindingRule;

impl SafeEqualsBindingRule {
    const EXPECTED: &'static str = "a binding whose value is an == comparison";
}

impl RewriteRule for SafeEqualsBindingRule {
    fn info(&self) -> &RuleInfo {
        &SAFE_EQUALS_BINDING_INFO
    }

    fn target(&self) -> NodeTag {
        NodeTag::Binding
    }

    fn matches(&self, node: &Node) -> bool {
        match node.kind() {
            NodeKind::Binding { value, .. } => {
                matches!(ungrouped(value).as_binary(), Some((BinaryOp::Eq, _, _)))
            }
            _ => false,
        }
    }

    fn transform(&self, node: Node) -> RewriteOutcome<Node> {
        let id = node.id;
        let (name, mut value) = match node.into_kind() {
            NodeKind::Binding { name, value } => (name, value),
            other => {
                return Err(RewriteError::shape_mismatch(
                    SAFE_EQUALS_BINDING_INFO.name,
                    Self::EXPECTED,
                    other.tag(),
                ));
            }
        };

        let value_id = value.id;
        loop {
            match value.into_kind() {
                NodeKind::Parenthesized(inner) => value = inner,
                NodeKind::Binary {
                    op: BinaryOp::Eq,
                    left,
                    right,
                } => {
                    let value = build_invocation(left, SAFE_EQUALS, [right]).with_id(value_id);
                    return Ok(Node::new(id, NodeKind::Binding { name, value }));
                }
                other => {
                    return Err(RewriteError::shape_mismatch(
                        SAFE_EQUALS_BINDING_INFO.name,
                        Self::EXPECTED,
                        other.tag(),
                    ));
                }
            }
        }
    }
}

/// Look through any grouping around an expression.
fn ungrouped(mut node: &Node) -> &Node {
    while let NodeKind::Parenthesized(inner) = node.kind() {
        node = inner;
    }
    node
}
