//! Ordered rule sets.
//!
//! The caller builds the rule set and hands it to the engine; there is no
//! global registry. Rules are kept sorted by [`RuleInfo::order`], and rules
//! with equal order keep the order they were added in.

use std::fmt;

use reform_syntax::Language;

use super::error::{RewriteError, RewriteOutcome};
use super::rule::RewriteRule;
use super::rules::{MatchConditionalRule, SafeEqualsBindingRule, SafeEqualsRule};

#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn RewriteRule>>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// All built-in rules.
    pub fn builtin() -> Self {
        Self::new()
            .with_rule(SafeEqualsRule)
            .with_rule(SafeEqualsBindingRule)
            .with_rule(MatchConditionalRule)
    }

    pub fn with_rule<R>(mut self, rule: R) -> Self
    where
        R: RewriteRule + 'static,
    {
        self.push(Box::new(rule));
        self
    }

    /// Insert a rule at its place in execution order.
    pub fn push(&mut self, rule: Box<dyn RewriteRule>) {
        let order = rule.info().order;
        let at = self.rules.partition_point(|r| r.info().order <= order);
        self.rules.insert(at, rule);
    }

    /// Keep only the named rules, still in execution order.
    ///
    /// Fails on the first name that is not in the set.
    pub fn select<S>(self, names: &[S]) -> RewriteOutcome<RuleSet>
    where
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if self.get(name).is_none() {
                return Err(RewriteError::UnknownRule(name.to_string()));
            }
        }

        let rules = self
            .rules
            .into_iter()
            .filter(|rule| names.iter().any(|name| name.as_ref() == rule.name()))
            .collect();
        Ok(RuleSet { rules })
    }

    pub fn get(&self, name: &str) -> Option<&dyn RewriteRule> {
        self.iter().find(|rule| rule.name() == name)
    }

    /// Rules in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn RewriteRule> + '_ {
        self.rules.iter().map(|rule| &**rule as &dyn RewriteRule)
    }

    /// Rules that apply to `language`, in execution order.
    pub fn for_language(
        &self,
        language: Language,
    ) -> impl Iterator<Item = &dyn RewriteRule> + '_ {
        self.iter().filter(move |rule| rule.info().supports(language))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|rule| rule.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
