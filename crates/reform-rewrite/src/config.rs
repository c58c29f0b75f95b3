//! Engine configuration.

use std::str::FromStr;

use derive_more::{Display, Error};
use reform_syntax::Language;
use serde::{Deserialize, Serialize};

/// How the active rules are combined into traversals.
///
/// The two modes give different results whenever one rule's match sits
/// inside another's, e.g. an `==` in a conditional's branch, so the choice is
/// always spelled out in the configuration.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Composition {
    /// One traversal with every active rule. Children are rewritten by the
    /// whole rule set before any rule looks at their parent.
    #[default]
    #[display("cascading")]
    Cascading,
    /// One traversal per rule, in rule-set order. Each traversal applies a
    /// single rule, and nested matches for other rules wait for their pass.
    #[display("isolated")]
    Isolated,
}

#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
#[display("unknown composition `{name}` (expected cascading or isolated)")]
pub struct ParseCompositionError {
    #[error(not(source))]
    pub name: String,
}

impl FromStr for Composition {
    type Err = ParseCompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cascading" => Ok(Composition::Cascading),
            "isolated" => Ok(Composition::Isolated),
            _ => Err(ParseCompositionError {
                name: s.to_string(),
            }),
        }
    }
}

/// Everything the engine needs besides the tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RewriteConfig {
    /// Language of the trees being rewritten.
    pub language: Language,
    pub composition: Composition,
    /// Names of the built-in rules to run; `None` runs all of them.
    pub rules: Option<Vec<String>>,
}
