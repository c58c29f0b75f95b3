//! Source-style rendering of syntax trees.
//!
//! Output reads like C#, which keeps test expectations and debug output
//! short: `a.SafeEquals(b)`, `(a == b).Match(t => x, f => y)`. The printer
//! adds no parentheses of its own; grouping only appears where the tree
//! holds a [`NodeKind::Parenthesized`] node, so what you read is exactly the
//! structure that is there. Opaque nodes print as `Tag { child; child }`.
//!
//! Source form can therefore be ambiguous: a member access on a
//! binary target such as `a + b` prints as `a + b.M()`, which reads as a call
//! on `b`. Use the JSON form when the exact structure matters.

use std::fmt::{self, Display, Formatter};

use super::node::{Literal, Node, NodeKind};

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.kind, f)
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Identifier(name) => write!(f, "{name}"),
            NodeKind::Literal(lit) => write!(f, "{lit}"),
            NodeKind::Binary { op, left, right } => write!(f, "{left} {op} {right}"),
            NodeKind::Conditional {
                condition,
                when_true,
                when_false,
            } => write!(f, "{condition} ? {when_true} : {when_false}"),
            NodeKind::MemberAccess { target, member } => write!(f, "{target}.{member}"),
            NodeKind::Invocation { callee, args } => {
                write!(f, "{callee}(")?;
                write_separated(f, args, ", ")?;
                f.write_str(")")
            }
            NodeKind::Lambda { param, body } => write!(f, "{param} => {body}"),
            NodeKind::Parenthesized(inner) => write!(f, "({inner})"),
            NodeKind::Binding { name, value } => write!(f, "{name} = {value}"),
            NodeKind::Opaque { tag, children } => {
                if children.is_empty() {
                    return f.write_str(tag);
                }
                write!(f, "{tag} {{ ")?;
                write_separated(f, children, "; ")?;
                f.write_str(" }")
            }
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Str(s) => write!(f, "{s:?}"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Null => f.write_str("null"),
        }
    }
}

fn write_separated(f: &mut Formatter<'_>, nodes: &[Node], sep: &str) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{node}")?;
    }
    Ok(())
}
