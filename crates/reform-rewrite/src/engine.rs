//! Engine entry point.
//!
//! Picks the rules that apply to the tree's language, arranges them into
//! traversals according to the [`Composition`], and runs a [`Walker`] per
//! traversal.

use std::collections::BTreeMap;

use reform_syntax::{Language, Node};

use super::catalog::RuleSet;
use super::config::{Composition, RewriteConfig};
use super::context::RewriteContext;
use super::error::RewriteOutcome;
use super::rule::RewriteRule;
use super::walker::Walker;

/// Result of rewriting a tree.
#[derive(Debug)]
pub struct ApplyResult {
    /// The rewritten tree.
    pub root: Node,
    /// Number of traversals performed.
    pub traversals: usize,
    /// Total number of replacements across all traversals.
    pub total_changes: usize,
    /// Replacements per rule name.
    pub changes_by_rule: BTreeMap<&'static str, usize>,
}

/// Rewrite `root` with the rules in `rules` that support `language`.
pub fn rewrite(
    root: Node,
    language: Language,
    rules: &RuleSet,
    composition: Composition,
) -> Node {
    apply(root, language, rules, composition).root
}

/// Like [`rewrite`], but also reports what changed.
pub fn apply(
    root: Node,
    language: Language,
    rules: &RuleSet,
    composition: Composition,
) -> ApplyResult {
    let active: Vec<&dyn RewriteRule> = rules.for_language(language).collect();
    if active.len() < rules.len() {
        tracing::debug!(
            %language,
            skipped = rules.len() - active.len(),
            "skipping rules that do not support the language"
        );
    }

    let mut total = RewriteContext::new();
    let (root, traversals) = if active.is_empty() {
        (root, 0)
    } else {
        match composition {
            Composition::Cascading => {
                let walker = Walker::new(active.iter().copied());
                (walker.visit(root, &mut total), 1)
            }
            Composition::Isolated => {
                let mut root = root;
                for &rule in &active {
                    let walker = Walker::new([rule]);
                    let mut ctx = RewriteContext::new();
                    root = walker.visit(root, &mut ctx);
                    tracing::debug!(
                        rule = rule.name(),
                        changes = ctx.changes_made(),
                        "finished isolated traversal"
                    );
                    total.merge(ctx);
                }
                (root, active.len())
            }
        }
    };

    ApplyResult {
        root,
        traversals,
        total_changes: total.changes_made(),
        changes_by_rule: total.into_counts(),
    }
}

/// A configured rewrite engine.
///
/// # Example
///
/// ```
/// use reform_rewrite::{Composition, Engine, RuleSet};
/// use reform_syntax::builder::{binary, identifier};
/// use reform_syntax::BinaryOp;
///
/// let engine = Engine::new(RuleSet::builtin()).with_composition(Composition::Isolated);
/// let root = binary(BinaryOp::NotEq, identifier("a"), identifier("b"));
/// assert_eq!(engine.rewrite(root).to_string(), "a.SafeNotEquals(b)");
/// ```
#[derive(Debug)]
pub struct Engine {
    rules: RuleSet,
    language: Language,
    composition: Composition,
}

impl Engine {
    /// Create an engine for C# trees with cascading composition.
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            language: Language::default(),
            composition: Composition::default(),
        }
    }

    /// Build an engine over the built-in rules selected by `config`.
    pub fn from_config(config: &RewriteConfig) -> RewriteOutcome<Self> {
        let rules = match &config.rules {
            Some(names) => RuleSet::builtin().select(names)?,
            None => RuleSet::builtin(),
        };
        Ok(Self::new(rules)
            .with_language(config.language)
            .with_composition(config.composition))
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn composition(&self) -> Composition {
        self.composition
    }

    pub fn apply(&self, root: Node) -> ApplyResult {
        apply(root, self.language, &self.rules, self.composition)
    }

    pub fn rewrite(&self, root: Node) -> Node {
        self.apply(root).root
    }
}
