//! Syntax node types.
//!
//! A tree is an immutable value graph: every node owns its children, and a
//! rewrite consumes a node and produces a new one instead of patching it in
//! place. Only the kinds the rewrite rules care about are modelled
//! precisely; everything else the parser knows about travels as
//! [`NodeKind::Opaque`].

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::node_id::NodeId;

/// A syntax node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Identifier for span lookup.
    #[serde(default)]
    pub id: NodeId,
    /// The kind of node.
    pub kind: Box<NodeKind>,
}

impl Node {
    /// Create a new node with the given ID and kind.
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            kind: Box::new(kind),
        }
    }

    /// Create a node that has no counterpart in the parsed source.
    pub fn synthetic(kind: NodeKind) -> Self {
        Self::new(NodeId::SYNTHETIC, kind)
    }

    /// Return the same node carrying a different id.
    pub fn with_id(mut self, id: NodeId) -> Self {
        self.id = id;
        self
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn into_kind(self) -> NodeKind {
        *self.kind
    }

    pub fn tag(&self) -> NodeTag {
        self.kind.tag()
    }

    pub fn role(&self) -> SyntaxRole {
        self.tag().role()
    }

    /// Children in source order.
    pub fn children(&self) -> Vec<&Node> {
        self.kind.children()
    }

    /// Number of nodes in this subtree, including the node itself.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Node::node_count)
            .sum::<usize>()
    }

    /// Rebuild this node with every direct child replaced by `f(child)`.
    ///
    /// The node keeps its id and kind; children are handed to `f` in source
    /// order and come back in that order.
    pub fn map_children(self, f: impl FnMut(Node) -> Node) -> Node {
        let Node { id, kind } = self;
        Node::new(id, kind.map_children(f))
    }

    /// Borrow the parts of a binary expression.
    pub fn as_binary(&self) -> Option<(BinaryOp, &Node, &Node)> {
        match &*self.kind {
            NodeKind::Binary { op, left, right } => Some((*op, left, right)),
            _ => None,
        }
    }
}

/// The different kinds of nodes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    // === Leaves ===
    /// Simple name: `value`
    Identifier(Identifier),

    /// Literal: `42`, `"text"`, `true`, `null`
    Literal(Literal),

    // === Expressions ===
    /// Binary operation: `a == b`, `a + b`
    Binary {
        op: BinaryOp,
        left: Node,
        right: Node,
    },

    /// Conditional expression: `condition ? when_true : when_false`
    Conditional {
        condition: Node,
        when_true: Node,
        when_false: Node,
    },

    /// Member access: `target.member`
    MemberAccess { target: Node, member: Identifier },

    /// Invocation: `callee(args)`
    Invocation { callee: Node, args: Vec<Node> },

    /// Single-parameter lambda: `param => body`
    Lambda { param: Identifier, body: Node },

    /// Explicit grouping: `(inner)`
    Parenthesized(Node),

    // === Clauses ===
    /// Value bound to a name inside a declaration: `name = value`
    Binding { name: Identifier, value: Node },

    /// Any other node kind, identified only by its parser tag.
    Opaque { tag: String, children: Vec<Node> },
}

impl NodeKind {
    pub fn tag(&self) -> NodeTag {
        match self {
            NodeKind::Identifier(_) => NodeTag::Identifier,
            NodeKind::Literal(_) => NodeTag::Literal,
            NodeKind::Binary { .. } => NodeTag::Binary,
            NodeKind::Conditional { .. } => NodeTag::Conditional,
            NodeKind::MemberAccess { .. } => NodeTag::MemberAccess,
            NodeKind::Invocation { .. } => NodeTag::Invocation,
            NodeKind::Lambda { .. } => NodeTag::Lambda,
            NodeKind::Parenthesized(_) => NodeTag::Parenthesized,
            NodeKind::Binding { .. } => NodeTag::Binding,
            NodeKind::Opaque { .. } => NodeTag::Opaque,
        }
    }

    /// Children in source order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            NodeKind::Identifier(_) | NodeKind::Literal(_) => Vec::new(),
            NodeKind::Binary { left, right, .. } => vec![left, right],
            NodeKind::Conditional {
                condition,
                when_true,
                when_false,
            } => vec![condition, when_true, when_false],
            NodeKind::MemberAccess { target, .. } => vec![target],
            NodeKind::Invocation { callee, args } => {
                let mut children = Vec::with_capacity(args.len() + 1);
                children.push(callee);
                children.extend(args);
                children
            }
            NodeKind::Lambda { body, .. } => vec![body],
            NodeKind::Parenthesized(inner) => vec![inner],
            NodeKind::Binding { value, .. } => vec![value],
            NodeKind::Opaque { children, .. } => children.iter().collect(),
        }
    }

    /// Rebuild the same kind with every child replaced by `f(child)`.
    pub fn map_children(self, mut f: impl FnMut(Node) -> Node) -> NodeKind {
        match self {
            leaf @ (NodeKind::Identifier(_) | NodeKind::Literal(_)) => leaf,
            NodeKind::Binary { op, left, right } => {
                let left = f(left);
                let right = f(right);
                NodeKind::Binary { op, left, right }
            }
            NodeKind::Conditional {
                condition,
                when_true,
                when_false,
            } => {
                let condition = f(condition);
                let when_true = f(when_true);
                let when_false = f(when_false);
                NodeKind::Conditional {
                    condition,
                    when_true,
                    when_false,
                }
            }
            NodeKind::MemberAccess { target, member } => NodeKind::MemberAccess {
                target: f(target),
                member,
            },
            NodeKind::Invocation { callee, args } => {
                let callee = f(callee);
                let args = args.into_iter().map(&mut f).collect();
                NodeKind::Invocation { callee, args }
            }
            NodeKind::Lambda { param, body } => NodeKind::Lambda {
                param,
                body: f(body),
            },
            NodeKind::Parenthesized(inner) => NodeKind::Parenthesized(f(inner)),
            NodeKind::Binding { name, value } => NodeKind::Binding {
                name,
                value: f(value),
            },
            NodeKind::Opaque { tag, children } => NodeKind::Opaque {
                tag,
                children: children.into_iter().map(f).collect(),
            },
        }
    }
}

/// Fieldless discriminant of [`NodeKind`], used to register rules per kind.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeTag {
    Identifier,
    Literal,
    Binary,
    Conditional,
    MemberAccess,
    Invocation,
    Lambda,
    Parenthesized,
    Binding,
    Opaque,
}

impl NodeTag {
    pub fn role(self) -> SyntaxRole {
        match self {
            NodeTag::Binding => SyntaxRole::Clause,
            NodeTag::Opaque => SyntaxRole::Unknown,
            _ => SyntaxRole::Expression,
        }
    }
}

/// The position a node can occupy in its parent.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum SyntaxRole {
    Expression,
    Clause,
    /// Opaque nodes: the model does not know what they are.
    Unknown,
}

/// A simple name.
#[derive(Clone, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Literal values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Literal {
    Int(i64),
    Str(String),
    Bool(bool),
    Null,
}

/// Binary operators.
///
/// Equality and inequality are the operators the rewrite rules key on;
/// the rest exist so that other comparisons and arithmetic survive a
/// rewrite untouched.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Equality
    #[display("==")]
    Eq,
    #[display("!=")]
    NotEq,

    // Relational
    #[display("<")]
    Lt,
    #[display("<=")]
    Le,
    #[display(">")]
    Gt,
    #[display(">=")]
    Ge,

    // Arithmetic
    #[display("+")]
    Add,
    #[display("-")]
    Sub,
    #[display("*")]
    Mul,
    #[display("/")]
    Div,
    #[display("%")]
    Rem,

    // Logical
    #[display("&&")]
    And,
    #[display("||")]
    Or,
    #[display("??")]
    Coalesce,
}
