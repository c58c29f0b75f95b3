//! Error types for rewriting.

use derive_more::{Display, Error};
use reform_syntax::NodeTag;

pub type RewriteOutcome<T> = Result<T, RewriteError>;

#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum RewriteError {
    /// A transform was handed a node outside the shape its predicate accepts.
    #[display("rule `{rule}` expected {expected}, found {found} node")]
    ShapeMismatch {
        rule: &'static str,
        expected: &'static str,
        found: NodeTag,
    },

    #[display("unknown rule `{_0}`")]
    UnknownRule(#[error(not(source))] String),
}

impl RewriteError {
    pub fn shape_mismatch(
        rule: &'static str,
        expected: &'static str,
        found: NodeTag,
    ) -> Self {
        RewriteError::ShapeMismatch {
            rule,
            expected,
            found,
        }
    }
}
