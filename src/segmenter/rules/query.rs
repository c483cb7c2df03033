//! Query-language (SQL) rule table.

use super::built_in_rule;
use crate::segmenter::types::{ClassificationRule, Dialect, RuleKind};

/// The query dialect table.
pub fn rules() -> Vec<ClassificationRule> {
    use Dialect::Query;
    use RuleKind::CodeStart;

    vec![
        built_in_rule(
            "q_statement",
            r"(?i)^(select|insert|update|delete|create|drop|alter)\s+",
            CodeStart,
            Query,
            "Leading statement keyword",
        ),
        built_in_rule(
            "q_clause",
            r"(?i)^(from|where|join|group by|order by|having)\s+",
            CodeStart,
            Query,
            "Leading clause keyword",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::rules::RuleSetBuilder;
    use crate::segmenter::types::RuleKind;

    #[test]
    fn test_statements_case_insensitive() {
        let s = RuleSetBuilder::new().rules(rules()).build();
        assert!(s.matches(RuleKind::CodeStart, "SELECT id, name"));
        assert!(s.matches(RuleKind::CodeStart, "from users u"));
        assert!(s.matches(RuleKind::CodeStart, "ORDER BY created_at DESC"));
        assert!(!s.matches(RuleKind::CodeStart, "Selecting a browser matters."));
    }
}
