//! User-defined rule loading and merging.
//!
//! Converts user-facing YAML rule definitions into runtime
//! [`ClassificationRule`] instances and applies enable/disable overrides to
//! the built-in tables. Rules with patterns that fail to compile are logged
//! and skipped rather than failing the whole file.

use regex::Regex;
use serde::Deserialize;

use super::RuleSet;
use crate::segmenter::types::{ClassificationRule, Dialect, RuleKind, RuleSource};

/// Errors from loading a user rule file.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The YAML document did not parse.
    #[error("failed to parse rule file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// A user-facing rule definition as written in YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRule {
    /// Unique ID. Reusing a built-in ID replaces that rule.
    pub id: String,
    /// Regex pattern, tested against one line.
    pub pattern: String,
    /// What a match signals.
    pub kind: RuleKind,
    /// Dialect group; defaults to `generic`.
    #[serde(default)]
    pub dialect: Option<Dialect>,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Whether the rule is active.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Lightweight override patching an existing rule without replacing it.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleOverride {
    /// The ID of the rule to override.
    pub id: String,
    /// If present, overrides the rule's enabled state.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Top-level shape of a YAML rule file.
#[derive(Debug, Default, Deserialize)]
pub struct RuleFile {
    /// Additional or replacement rules.
    #[serde(default)]
    pub rules: Vec<UserRule>,
    /// Overrides for built-in rules.
    #[serde(default)]
    pub overrides: Vec<RuleOverride>,
}

fn default_true() -> bool {
    true
}

/// Compile a user rule into a runtime rule.
///
/// Returns `None` (with a warning) when the pattern fails to compile.
pub fn parse_user_rule(rule: &UserRule) -> Option<ClassificationRule> {
    match Regex::new(&rule.pattern) {
        Ok(pattern) => Some(ClassificationRule {
            id: rule.id.clone(),
            pattern,
            kind: rule.kind,
            dialect: rule.dialect.unwrap_or(Dialect::Generic),
            source: RuleSource::UserDefined,
            description: rule.description.clone(),
            enabled: rule.enabled,
        }),
        Err(e) => {
            log::warn!(
                "skipping user rule '{}': invalid pattern {:?}: {}",
                rule.id,
                rule.pattern,
                e
            );
            None
        }
    }
}

/// Parse a YAML rule file and apply it to a rule set.
///
/// Overrides are applied first, then additional/replacement rules are merged.
pub fn apply_rule_file(set: &mut RuleSet, yaml: &str) -> Result<(), RuleError> {
    let file: RuleFile = serde_yaml_ng::from_str(yaml)?;
    set.apply_overrides(&file.overrides);
    let parsed: Vec<_> = file.rules.iter().filter_map(parse_user_rule).collect();
    log::debug!(
        "loaded {} user rules, {} overrides",
        parsed.len(),
        file.overrides.len()
    );
    set.merge_user_rules(parsed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::rules::RuleSet;

    #[test]
    fn test_apply_rule_file_merges_and_overrides() {
        let mut set = RuleSet::built_in();
        let yaml = r#"
rules:
  - id: user_arrow
    pattern: "=>"
    kind: code-start
    dialect: script
    description: "bare arrow anywhere"
overrides:
  - id: cm_line_hash
    enabled: false
"#;
        apply_rule_file(&mut set, yaml).expect("valid rule file");

        // No built-in code-start rule claims a bare arrow expression.
        assert!(set.matches(RuleKind::CodeStart, "a => b"));
        assert!(!set.matches(RuleKind::Comment, "# not a comment anymore"));
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let mut set = RuleSet::built_in();
        let before = set.rules().len();
        let yaml = r#"
rules:
  - id: broken
    pattern: "(["
    kind: code-start
"#;
        apply_rule_file(&mut set, yaml).expect("file parses even when a pattern is bad");
        assert_eq!(set.rules().len(), before);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let mut set = RuleSet::built_in();
        assert!(apply_rule_file(&mut set, ": not yaml [").is_err());
    }
}
