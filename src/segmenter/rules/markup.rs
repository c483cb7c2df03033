//! Markup (HTML/XML) rule table.

use super::built_in_rule;
use crate::segmenter::types::{ClassificationRule, Dialect, RuleKind};

/// The markup dialect table.
pub fn rules() -> Vec<ClassificationRule> {
    use Dialect::Markup;
    use RuleKind::CodeStart;

    vec![
        built_in_rule(
            "mk_tag_open",
            r"(?i)^<[a-z][^>]*>",
            CodeStart,
            Markup,
            "Opening (or self-closing) tag",
        ),
        built_in_rule(
            "mk_tag_close",
            r"(?i)^</[a-z][^>]*>",
            CodeStart,
            Markup,
            "Closing tag",
        ),
        built_in_rule(
            "mk_doctype",
            r"(?i)^<!doctype",
            CodeStart,
            Markup,
            "DOCTYPE declaration",
        ),
        built_in_rule(
            "mk_comment",
            r"^<!--.*-->",
            CodeStart,
            Markup,
            "Single-line HTML comment",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::rules::RuleSetBuilder;
    use crate::segmenter::types::RuleKind;

    #[test]
    fn test_tags_match() {
        let s = RuleSetBuilder::new().rules(rules()).build();
        assert!(s.matches(RuleKind::CodeStart, "<div class=\"card\">"));
        assert!(s.matches(RuleKind::CodeStart, "</div>"));
        assert!(s.matches(RuleKind::CodeStart, "<br/>"));
        assert!(s.matches(RuleKind::CodeStart, "<!DOCTYPE html>"));
        assert!(s.matches(RuleKind::CodeStart, "<!-- header -->"));
        // Prose that mentions angle brackets mid-line is not markup.
        assert!(!s.matches(RuleKind::CodeStart, "Use the <div> element here."));
    }
}
