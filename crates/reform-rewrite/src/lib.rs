//! Rule-driven rewriting of reform syntax trees.
//!
//! The engine recognizes expression shapes a project wants to ban and
//! replaces them with calls to helper methods, leaving everything else in
//! the tree as it was.
//!
//! # Overview
//!
//! - [`RewriteRule`]: a predicate plus a transform over one node kind
//! - [`Walker`]: post-order traversal that offers rebuilt nodes to rules
//! - [`RuleSet`]: an explicit, ordered list of rules
//! - [`Engine`] / [`rewrite`]: run a rule set over a tree
//!
//! The built-in rules live in [`rules`]:
//!
//! ```text
//! a == b          →  a.SafeEquals(b)
//! a != b          →  a.SafeNotEquals(b)
//! x = a == b      →  x = a.SafeEquals(b)
//! c ? x : y       →  c.Match(t => x, f => y)
//! ```
//!
//! # Composition
//!
//! With [`Composition::Cascading`] all rules share one traversal, so a
//! comparison inside a conditional is rewritten before the conditional
//! itself. With [`Composition::Isolated`] every rule gets a traversal of its
//! own.
//!
//! ```
//! use reform_rewrite::{rewrite, Composition, RuleSet};
//! use reform_syntax::builder::{binary, conditional, identifier, parenthesize};
//! use reform_syntax::{BinaryOp, Language};
//!
//! let root = conditional(
//!     parenthesize(binary(BinaryOp::Eq, identifier("a"), identifier("b"))),
//!     identifier("x"),
//!     identifier("y"),
//! );
//! let rules = RuleSet::builtin();
//! let root = rewrite(root, Language::CSharp, &rules, Composition::Cascading);
//! assert_eq!(root.to_string(), "(a.SafeEquals(b)).Match(t => x, f => y)");
//! ```

mod catalog;
mod config;
mod context;
mod engine;
mod error;
mod result;
mod rule;
pub mod rules;
mod walker;

pub use catalog::RuleSet;
pub use config::{Composition, ParseCompositionError, RewriteConfig};
pub use context::RewriteContext;
pub use engine::{ApplyResult, Engine, apply, rewrite};
pub use error::{RewriteError, RewriteOutcome};
pub use result::RewriteResult;
pub use rule::{RewriteRule, RuleInfo};
pub use walker::Walker;
