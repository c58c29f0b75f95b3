//! End-to-end behaviour of the built-in rules over whole trees.

use insta::assert_snapshot;
use reform_rewrite::{Composition, RuleSet, apply, rewrite};
use reform_syntax::builder::*;
use reform_syntax::{BinaryOp, Language, Node, NodeId};

fn eq(left: Node, right: Node) -> Node {
    binary(BinaryOp::Eq, left, right)
}

fn cascade(root: Node) -> Node {
    rewrite(root, Language::CSharp, &RuleSet::builtin(), Composition::Cascading)
}

/// Trees with no `==`, `!=` or `?:` anywhere, including already rewritten ones.
fn untargeted_trees() -> Vec<Node> {
    vec![
        identifier("a"),
        int(42),
        null(),
        binary(BinaryOp::Add, identifier("a"), int(1)),
        binary(
            BinaryOp::And,
            binary(BinaryOp::Lt, identifier("i"), identifier("n")),
            boolean(true),
        ),
        build_invocation(
            member_access(identifier("Console"), "Out"),
            "WriteLine",
            [string("hi"), binary(BinaryOp::Coalesce, identifier("x"), null())],
        ),
        lambda("p", parenthesize(binary(BinaryOp::Mul, identifier("p"), int(2)))),
        binding("total", binary(BinaryOp::Sub, identifier("a"), identifier("b"))),
        binding(
            "x",
            parenthesize(build_invocation(identifier("a"), "SafeEquals", [identifier("b")])),
        ),
        opaque(
            "Block",
            [
                opaque("Return", [identifier("r")]),
                opaque("Empty", []),
                binding("v", parenthesize(identifier("w"))),
            ],
        ),
    ]
}

#[test]
fn test_trees_without_targets_are_unchanged() {
    for composition in [Composition::Cascading, Composition::Isolated] {
        for tree in untargeted_trees() {
            let count = tree.node_count();
            let result = apply(tree.clone(), Language::CSharp, &RuleSet::builtin(), composition);
            assert_eq!(result.total_changes, 0, "{tree}");
            assert_eq!(result.root.node_count(), count);
            assert_eq!(result.root, tree);
        }
    }
}

#[test]
fn test_rewriting_twice_changes_nothing_more() {
    let trees = [
        eq(identifier("a"), identifier("b")),
        binary(BinaryOp::NotEq, identifier("a"), int(0)),
        binding("same", parenthesize(eq(identifier("a"), identifier("b")))),
        conditional(
            eq(identifier("a"), identifier("b")),
            conditional(identifier("c"), int(1), int(2)),
            identifier("y"),
        ),
    ];
    for tree in trees {
        let once = cascade(tree);
        let result = apply(
            once.clone(),
            Language::CSharp,
            &RuleSet::builtin(),
            Composition::Cascading,
        );
        assert_eq!(result.total_changes, 0, "{once}");
        assert_eq!(result.root, once);
    }
}

#[test]
fn test_equality_and_inequality() {
    assert_snapshot!(cascade(eq(identifier("a"), identifier("b"))), @"a.SafeEquals(b)");
    assert_snapshot!(
        cascade(binary(BinaryOp::NotEq, identifier("a"), identifier("b"))),
        @"a.SafeNotEquals(b)"
    );
    assert_snapshot!(
        cascade(eq(build_invocation(identifier("x"), "Get", []), string("k"))),
        @r#"x.Get().SafeEquals("k")"#
    );
}

#[test]
fn test_equality_in_binding() {
    assert_snapshot!(
        cascade(binding("x", eq(identifier("a"), identifier("b")))),
        @"x = a.SafeEquals(b)"
    );
    assert_snapshot!(
        cascade(binding("x", parenthesize(eq(identifier("a"), identifier("b"))))),
        @"x = (a.SafeEquals(b))"
    );
}

#[test]
fn test_grouped_binding_is_the_same_in_both_modes() {
    let tree = binding("x", parenthesize(eq(identifier("a"), identifier("b"))));
    let rules = RuleSet::builtin();
    for composition in [Composition::Cascading, Composition::Isolated] {
        let result = apply(tree.clone(), Language::CSharp, &rules, composition);
        insta::allow_duplicates! {
            assert_snapshot!(result.root, @"x = (a.SafeEquals(b))");
        }
        assert_eq!(result.changes_by_rule.get("SafeEquals"), Some(&1));
        assert_eq!(result.changes_by_rule.get("SafeEqualsBinding"), None);
    }
}

#[test]
fn test_binding_rule_alone_drops_grouping() {
    let rules = RuleSet::builtin().select(&["SafeEqualsBinding"]).unwrap();
    let tree = binding("x", parenthesize(eq(identifier("a"), identifier("b"))));
    let root = rewrite(tree, Language::CSharp, &rules, Composition::Cascading);
    assert_snapshot!(root, @"x = a.SafeEquals(b)");
}

#[test]
fn test_conditional_on_identifier() {
    assert_snapshot!(
        cascade(conditional(identifier("ready"), identifier("x"), identifier("y"))),
        @"ready.Match(t => x, f => y)"
    );
}

#[test]
fn test_conditional_on_grouped_equality() {
    let tree = conditional(
        parenthesize(eq(identifier("a"), identifier("b"))),
        identifier("x"),
        identifier("y"),
    );
    assert_snapshot!(cascade(tree), @"(a.SafeEquals(b)).Match(t => x, f => y)");
}

#[test]
fn test_nested_equality_is_rewritten_before_the_conditional() {
    let tree = conditional(
        identifier("c"),
        eq(identifier("a"), int(1)),
        binary(BinaryOp::NotEq, identifier("a"), int(2)),
    );
    let result = apply(tree, Language::CSharp, &RuleSet::builtin(), Composition::Cascading);
    assert_snapshot!(
        result.root,
        @"c.Match(t => a.SafeEquals(1), f => a.SafeNotEquals(2))"
    );
    assert_eq!(result.changes_by_rule.get("SafeEquals"), Some(&2));
    assert_eq!(result.changes_by_rule.get("MatchConditional"), Some(&1));
}

#[test]
fn test_isolated_conditional_only_keeps_nested_comparison() {
    let rules = RuleSet::builtin().select(&["MatchConditional"]).unwrap();
    let tree = conditional(
        identifier("c"),
        eq(identifier("a"), identifier("b")),
        identifier("y"),
    );
    let result = apply(tree, Language::CSharp, &rules, Composition::Isolated);
    assert_eq!(result.traversals, 1);
    assert_snapshot!(result.root, @"c.Match(t => a == b, f => y)");
}

#[test]
fn test_isolated_runs_later_rules_over_earlier_output() {
    let tree = opaque(
        "Block",
        [
            binding("same", eq(identifier("a"), identifier("b"))),
            conditional(eq(identifier("p"), identifier("q")), int(1), int(0)),
        ],
    );
    let result = apply(tree, Language::CSharp, &RuleSet::builtin(), Composition::Isolated);
    assert_eq!(result.traversals, 3);
    assert_snapshot!(
        result.root,
        @"Block { same = a.SafeEquals(b); p.SafeEquals(q).Match(t => 1, f => 0) }"
    );
}

#[test]
fn test_each_comparison_is_rewritten_once() {
    let tree = binding("x", eq(identifier("a"), identifier("b")));
    let result = apply(tree, Language::CSharp, &RuleSet::builtin(), Composition::Cascading);
    assert_eq!(result.total_changes, 1);
    assert_eq!(result.changes_by_rule.get("SafeEquals"), Some(&1));
    assert_eq!(result.changes_by_rule.get("SafeEqualsBinding"), None);
    assert_snapshot!(result.root, @"x = a.SafeEquals(b)");
}

#[test]
fn test_replacement_keeps_source_id() {
    let tree = opaque(
        "Block",
        [eq(identifier("a"), identifier("b")).with_id(NodeId::from_raw(3))],
    )
    .with_id(NodeId::from_raw(1));
    let root = cascade(tree);
    assert_eq!(root.id, NodeId::from_raw(1));
    assert_eq!(root.children()[0].id, NodeId::from_raw(3));
}

#[test]
fn test_visual_basic_trees_are_left_alone() {
    let tree = conditional(
        eq(identifier("a"), identifier("b")),
        identifier("x"),
        identifier("y"),
    );
    for composition in [Composition::Cascading, Composition::Isolated] {
        let result = apply(
            tree.clone(),
            Language::VisualBasic,
            &RuleSet::builtin(),
            composition,
        );
        assert_eq!(result.traversals, 0);
        assert_eq!(result.root, tree);
    }
}

#[test]
fn test_independent_trees_rewrite_in_parallel() {
    let rules = RuleSet::builtin();
    let trees: Vec<Node> = (0..8)
        .map(|i| {
            conditional(
                eq(identifier("a"), int(i)),
                identifier("x"),
                identifier("y"),
            )
        })
        .collect();

    let results: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = trees
            .into_iter()
            .map(|tree| {
                let rules = &rules;
                s.spawn(move || {
                    rewrite(tree, Language::CSharp, rules, Composition::Cascading).to_string()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, rendered) in results.iter().enumerate() {
        assert_eq!(rendered, &format!("a.SafeEquals({i}).Match(t => x, f => y)"));
    }
}
