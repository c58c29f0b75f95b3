//! Syntax tree model for reform.
//!
//! This crate defines the immutable node representation the rewrite engine
//! operates on, the constructors rules use to synthesize replacement nodes,
//! and a source-style printer for reading rewritten trees.
//!
//! ## Node + NodeKind
//!
//! A [`Node`] pairs a [`NodeId`] with a boxed [`NodeKind`]. The id is owned
//! by whatever parsed the tree and is only carried along; the kind holds the
//! structure. Kinds the rewrite rules inspect are modelled precisely, and
//! everything else travels as [`NodeKind::Opaque`] with its children, so a
//! traversal can always rebuild a node it knows nothing about.
//!
//! ## Example
//!
//! ```
//! use reform_syntax::builder::{binary, build_invocation, identifier};
//! use reform_syntax::BinaryOp;
//!
//! let cmp = binary(BinaryOp::Eq, identifier("a"), identifier("b"));
//! assert_eq!(cmp.to_string(), "a == b");
//!
//! let call = build_invocation(identifier("a"), "SafeEquals", [identifier("b")]);
//! assert_eq!(call.to_string(), "a.SafeEquals(b)");
//! ```

pub mod builder;
mod display;
mod language;
mod node;
mod node_id;

pub use language::{Language, ParseLanguageError};
pub use node::*;
pub use node_id::NodeId;
