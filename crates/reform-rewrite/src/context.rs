//! Per-traversal bookkeeping.

use std::collections::BTreeMap;

/// Records what a traversal changed.
///
/// A fresh context is created for every traversal; the walker itself keeps
/// nothing between calls.
#[derive(Clone, Debug, Default)]
pub struct RewriteContext {
    changes: usize,
    by_rule: BTreeMap<&'static str, usize>,
}

impl RewriteContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one replacement made by `rule`.
    pub fn record_change(&mut self, rule: &'static str) {
        self.changes += 1;
        *self.by_rule.entry(rule).or_default() += 1;
    }

    pub fn changes_made(&self) -> usize {
        self.changes
    }

    pub fn changes_by(&self, rule: &str) -> usize {
        self.by_rule.get(rule).copied().unwrap_or(0)
    }

    /// Fold another traversal's counts into this one.
    pub fn merge(&mut self, other: RewriteContext) {
        self.changes += other.changes;
        for (rule, count) in other.by_rule {
            *self.by_rule.entry(rule).or_default() += count;
        }
    }

    pub fn into_counts(self) -> BTreeMap<&'static str, usize> {
        self.by_rule
    }
}
