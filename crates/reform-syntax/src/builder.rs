//! Constructors for synthesized nodes.
//!
//! Every node built here carries [`NodeId::SYNTHETIC`](crate::NodeId::SYNTHETIC);
//! callers that replace a source node re-attach its id with
//! [`Node::with_id`].

use super::node::{BinaryOp, Identifier, Literal, Node, NodeKind};

/// Build `receiver.member(args...)`.
///
/// This is the one construction convention for helper calls; both rewrite
/// rules go through it.
pub fn build_invocation(
    receiver: Node,
    member: impl Into<Identifier>,
    args: impl IntoIterator<Item = Node>,
) -> Node {
    Node::synthetic(NodeKind::Invocation {
        callee: member_access(receiver, member),
        args: args.into_iter().collect(),
    })
}

pub fn member_access(target: Node, member: impl Into<Identifier>) -> Node {
    Node::synthetic(NodeKind::MemberAccess {
        target,
        member: member.into(),
    })
}

pub fn lambda(param: impl Into<Identifier>, body: Node) -> Node {
    Node::synthetic(NodeKind::Lambda {
        param: param.into(),
        body,
    })
}

pub fn parenthesize(inner: Node) -> Node {
    Node::synthetic(NodeKind::Parenthesized(inner))
}

pub fn identifier(name: impl Into<Identifier>) -> Node {
    Node::synthetic(NodeKind::Identifier(name.into()))
}

pub fn int(value: i64) -> Node {
    Node::synthetic(NodeKind::Literal(Literal::Int(value)))
}

pub fn string(value: impl Into<String>) -> Node {
    Node::synthetic(NodeKind::Literal(Literal::Str(value.into())))
}

pub fn boolean(value: bool) -> Node {
    Node::synthetic(NodeKind::Literal(Literal::Bool(value)))
}

pub fn null() -> Node {
    Node::synthetic(NodeKind::Literal(Literal::Null))
}

pub fn binary(op: BinaryOp, left: Node, right: Node) -> Node {
    Node::synthetic(NodeKind::Binary { op, left, right })
}

pub fn conditional(condition: Node, when_true: Node, when_false: Node) -> Node {
    Node::synthetic(NodeKind::Conditional {
        condition,
        when_true,
        when_false,
    })
}

pub fn binding(name: impl Into<Identifier>, value: Node) -> Node {
    Node::synthetic(NodeKind::Binding {
        name: name.into(),
        value,
    })
}

pub fn opaque(tag: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Node {
    Node::synthetic(NodeKind::Opaque {
        tag: tag.into(),
        children: children.into_iter().collect(),
    })
}
