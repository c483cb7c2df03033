//! Stylesheet (CSS) rule table.

use super::built_in_rule;
use crate::segmenter::types::{ClassificationRule, Dialect, RuleKind};

/// The stylesheet dialect table.
pub fn rules() -> Vec<ClassificationRule> {
    use Dialect::Stylesheet;
    use RuleKind::CodeStart;

    vec![
        built_in_rule(
            "cs_selector_brace",
            r"^[.#][\w-]+\s*\{",
            CodeStart,
            Stylesheet,
            "Class/ID selector opening a declaration block",
        ),
        built_in_rule(
            "cs_at_rule",
            r"(?i)^@(media|keyframes|import|font-face|supports)",
            CodeStart,
            Stylesheet,
            "At-rule",
        ),
        built_in_rule(
            "cs_property",
            r"^[a-z-]+\s*:\s*[^;]+;",
            CodeStart,
            Stylesheet,
            "property: value; declaration",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::rules::RuleSetBuilder;
    use crate::segmenter::types::RuleKind;

    #[test]
    fn test_selectors_and_declarations() {
        let s = RuleSetBuilder::new().rules(rules()).build();
        assert!(s.matches(RuleKind::CodeStart, ".card {"));
        assert!(s.matches(RuleKind::CodeStart, "#app{ display: grid; }"));
        assert!(s.matches(RuleKind::CodeStart, "@media (min-width: 600px) {"));
        assert!(s.matches(RuleKind::CodeStart, "container-type: inline-size;"));
        assert!(!s.matches(RuleKind::CodeStart, "Selectors target elements."));
    }
}
