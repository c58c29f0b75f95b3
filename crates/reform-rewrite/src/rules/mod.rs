//! Built-in rewrite rules.

mod conditional;
mod safe_equals;

pub use conditional::{FALSE_PARAM, MATCH, MatchConditionalRule, TRUE_PARAM};
pub use safe_equals::{SAFE_EQUALS, SAFE_NOT_EQUALS, SafeEqualsBindingRule, SafeEqualsRule};
