//! Dialect-independent comment markers.
//!
//! Comment lines always classify as code: a comment belongs to the code
//! around it, and splitting it off would fragment the block. Multi-line
//! block-comment state is procedural (`/* ... */` and `<!-- ... -->` spans
//! are tracked by the scanner, not by these single-line patterns).

use super::built_in_rule;
use crate::segmenter::types::{ClassificationRule, Dialect, RuleKind};

/// The comment-marker table.
pub fn rules() -> Vec<ClassificationRule> {
    use Dialect::Generic;
    use RuleKind::Comment;

    vec![
        built_in_rule(
            "cm_line_slash",
            r"^\s*//",
            Comment,
            Generic,
            "// line comment",
        ),
        built_in_rule(
            "cm_line_hash",
            r"^\s*#",
            Comment,
            Generic,
            "# line comment",
        ),
        built_in_rule(
            "cm_block_single",
            r"^\s*/\*.*\*/",
            Comment,
            Generic,
            "/* ... */ on one line",
        ),
        built_in_rule(
            "cm_html_single",
            r"^\s*<!--.*-->",
            Comment,
            Generic,
            "<!-- ... --> on one line",
        ),
    ]
}
