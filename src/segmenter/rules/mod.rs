//! Classification rule tables.
//!
//! One explicit, testable configuration replaces the per-call-site regex
//! globals the source behavior was scattered across: an ordered table of
//! `(pattern, kind)` rules grouped by dialect, compiled once and passed to
//! the segmenter as a value.
//!
//! - [`script`] — script-language statements and well-known globals (JS/TS)
//! - [`markup`] — markup tag patterns (HTML/XML)
//! - [`stylesheet`] — selector/at-rule/property patterns (CSS)
//! - [`query`] — query-language leading keywords (SQL)
//! - [`comments`] — dialect-independent comment markers
//! - [`natural`] — natural-language and short-text/question patterns
//! - [`loader`] — user-defined YAML rules and overrides

pub mod comments;
pub mod loader;
pub mod markup;
pub mod natural;
pub mod query;
pub mod script;
pub mod stylesheet;

pub use loader::{RuleError, RuleOverride, UserRule};

use regex::Regex;

use super::types::{ClassificationRule, Dialect, RuleKind, RuleSource};

/// Construct a built-in rule from a static pattern.
pub(crate) fn built_in_rule(
    id: &str,
    pattern: &str,
    kind: RuleKind,
    dialect: Dialect,
    description: &str,
) -> ClassificationRule {
    ClassificationRule {
        id: id.to_string(),
        pattern: Regex::new(pattern).expect("regex pattern is valid and should always compile"),
        kind,
        dialect,
        source: RuleSource::BuiltIn,
        description: description.to_string(),
        enabled: true,
    }
}

/// An ordered, queryable set of classification rules.
///
/// Rule order within a kind is significant only for [`RuleSet::first_match`];
/// [`RuleSet::matches`] is order-independent.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<ClassificationRule>,
}

impl RuleSet {
    /// The full built-in rule set: every dialect table in declaration order.
    pub fn built_in() -> Self {
        RuleSetBuilder::new()
            .rules(script::rules())
            .rules(markup::rules())
            .rules(stylesheet::rules())
            .rules(query::rules())
            .rules(comments::rules())
            .rules(natural::rules())
            .build()
    }

    /// All rules, for inspection.
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Whether any enabled rule of `kind` matches `line`.
    pub fn matches(&self, kind: RuleKind, line: &str) -> bool {
        self.first_match(kind, line).is_some()
    }

    /// First enabled rule of `kind` matching `line`, in table order.
    pub fn first_match(&self, kind: RuleKind, line: &str) -> Option<&ClassificationRule> {
        self.rules
            .iter()
            .find(|r| r.enabled && r.kind == kind && r.pattern.is_match(line))
    }

    /// Merge user-defined rules into this set.
    ///
    /// A user rule with the same ID as an existing rule replaces its pattern,
    /// kind, dialect, description, and enabled state. New IDs are appended.
    pub fn merge_user_rules(&mut self, user_rules: Vec<ClassificationRule>) {
        for user_rule in user_rules {
            if let Some(existing) = self.rules.iter_mut().find(|r| r.id == user_rule.id) {
                existing.pattern = user_rule.pattern;
                existing.kind = user_rule.kind;
                existing.dialect = user_rule.dialect;
                existing.description = user_rule.description;
                existing.enabled = user_rule.enabled;
                existing.source = user_rule.source;
            } else {
                self.rules.push(user_rule);
            }
        }
    }

    /// Apply lightweight overrides (enable/disable) to existing rules.
    ///
    /// Unknown rule IDs are logged and ignored.
    pub fn apply_overrides(&mut self, overrides: &[RuleOverride]) {
        for ov in overrides {
            match self.rules.iter_mut().find(|r| r.id == ov.id) {
                Some(rule) => {
                    if let Some(enabled) = ov.enabled {
                        rule.enabled = enabled;
                    }
                }
                None => {
                    log::warn!("rule override references unknown rule id '{}'", ov.id);
                }
            }
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::built_in()
    }
}

/// Builder assembling a [`RuleSet`] from rule tables.
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: Vec<ClassificationRule>,
}

impl RuleSetBuilder {
    /// Start with an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single rule.
    pub fn rule(mut self, rule: ClassificationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a table of rules, preserving order.
    pub fn rules(mut self, rules: Vec<ClassificationRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Finish the set.
    pub fn build(self) -> RuleSet {
        RuleSet { rules: self.rules }
    }
}
