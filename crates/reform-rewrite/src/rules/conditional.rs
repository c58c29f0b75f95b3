//! Conditional rewrite.
//!
//! ```text
//! cond ? x : y      →  cond.Match(t => x, f => y)
//! a == b ? x : y    →  (a == b).Match(t => x, f => y)
//! ```
//!
//! Both branches are passed as lambdas, so the `Match` helper decides which
//! one runs and the other stays unevaluated, as it was in the conditional.

use reform_syntax::builder::{build_invocation, lambda, parenthesize};
use reform_syntax::{Language, Node, NodeKind, NodeTag};

use super::super::error::{RewriteError, RewriteOutcome};
use super::super::rule::{RewriteRule, RuleInfo};

/// Helper invoked on the condition.
pub const MATCH: &str = "Match";
/// Parameter of the lambda wrapping the true branch.
pub const TRUE_PARAM: &str = "t";
/// Parameter of the lambda wrapping the false branch.
pub const FALSE_PARAM: &str = "f";

static MATCH_CONDITIONAL_INFO: RuleInfo = RuleInfo {
    name: "MatchConditional",
    description: "Replace conditional expressions with Match over two deferred branches.",
    order: 200,
    languages: &[Language::CSharp],
};

/// Rewrites `?:` into a `Match` invocation on the condition.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchConditionalRule;

impl RewriteRule for MatchConditionalRule {
    fn info(&self) -> &RuleInfo {
        &MATCH_CONDITIONAL_INFO
    }

    fn target(&self) -> NodeTag {
        NodeTag::Conditional
    }

    fn matches(&self, node: &Node) -> bool {
        node.tag() == NodeTag::Conditional
    }

    fn transform(&self, node: Node) -> RewriteOutcome<Node> {
        let id = node.id;
        match node.into_kind() {
            NodeKind::Conditional {
                condition,
                when_true,
                when_false,
            } => {
                let receiver = receiver(condition);
                let branches = [lambda(TRUE_PARAM, when_true), lambda(FALSE_PARAM, when_false)];
                Ok(build_invocation(receiver, MATCH, branches).with_id(id))
            }
            other => Err(RewriteError::shape_mismatch(
                MATCH_CONDITIONAL_INFO.name,
                "a conditional expression",
                other.tag(),
            )),
        }
    }
}

/// Make the condition safe to put in front of `.Match`.
///
/// `a == b.Match(..)` would bind the member access to `b`, so a bare binary
/// condition gets grouped. Every other shape is used as it is.
fn receiver(condition: Node) -> Node {
    match condition.tag() {
        NodeTag::Binary => parenthesize(condition),
        _ => condition,
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use reform_syntax::builder::*;
    use reform_syntax::{BinaryOp, NodeId};

    use super::*;

    #[test]
    fn test_identifier_condition_is_used_as_receiver() {
        let node = conditional(identifier("cond"), identifier("x"), identifier("y"));
        let rewritten = MatchConditionalRule.transform(node).unwrap();
        assert_snapshot!(rewritten.to_string(), @"cond.Match(t => x, f => y)");
    }

    #[test]
    fn test_binary_condition_is_grouped() {
        let node = conditional(
            binary(BinaryOp::Gt, identifier("a"), int(0)),
            string("positive"),
            string("other"),
        );
        let rewritten = MatchConditionalRule.transform(node).unwrap();
        assert_snapshot!(rewritten.to_string(), @r#"(a > 0).Match(t => "positive", f => "other")"#);
    }

    #[test]
    fn test_grouped_and_invocation_conditions_are_not_grouped_again() {
        let grouped = conditional(
            parenthesize(binary(BinaryOp::Eq, identifier("a"), identifier("b"))),
            int(1),
            int(2),
        );
        assert_snapshot!(
            MatchConditionalRule.transform(grouped).unwrap().to_string(),
            @"(a == b).Match(t => 1, f => 2)"
        );

        let call = conditional(
            build_invocation(identifier("a"), "SafeEquals", [identifier("b")]),
            int(1),
            int(2),
        );
        assert_snapshot!(
            MatchConditionalRule.transform(call).unwrap().to_string(),
            @"a.SafeEquals(b).Match(t => 1, f => 2)"
        );
    }

    #[test]
    fn test_branches_become_deferred_lambdas() {
        let node = conditional(identifier("c"), identifier("x"), identifier("y"))
            .with_id(NodeId::from_raw(11));
        let rewritten = MatchConditionalRule.transform(node).unwrap();
        assert_eq!(rewritten.id, NodeId::from_raw(11));

        let NodeKind::Invocation { args, .. } = rewritten.kind() else {
            panic!("expected invocation, got {rewritten}");
        };
        assert_eq!(
            args,
            &vec![lambda("t", identifier("x")), lambda("f", identifier("y"))]
        );
    }

    #[test]
    fn test_forced_transform_reports_shape_mismatch() {
        let node = binary(BinaryOp::Eq, identifier("a"), identifier("b"));
        assert!(!MatchConditionalRule.matches(&node));
        let err = MatchConditionalRule.transform(node).unwrap_err();
        assert_eq!(
            err.to_string(),
            "rule `MatchConditional` expected a conditional expression, found Binary node"
        );
    }
}
