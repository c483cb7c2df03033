//! Per-line classification.
//!
//! The hardest part of the problem: natural-language explanations of code
//! ("This function calls fetch...") must not classify as code, and code that
//! reads like English (bare identifiers, short statements) must not classify
//! as prose. Decisions follow a strict precedence order; ambiguity is pushed
//! to the scanner's run-level smoothing rather than resolved per line.

use crate::segmenter::config::SegmenterConfig;
use crate::segmenter::rules::RuleSet;
use crate::segmenter::types::RuleKind;

/// Outcome of classifying one line in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Whitespace only. Never changes run state; appended to whatever
    /// segment is open.
    Blank,
    /// Code: comment, definite code start, or continuation shape.
    Code,
    /// Unambiguous natural language. Ends an open code run immediately.
    ProseExplicit,
    /// Nothing matched. Prose by default, but treated as ambiguous inside a
    /// code run.
    ProseDefault,
}

/// Classifies single lines against a rule set.
pub struct LineClassifier<'a> {
    rules: &'a RuleSet,
    config: &'a SegmenterConfig,
}

impl<'a> LineClassifier<'a> {
    pub fn new(rules: &'a RuleSet, config: &'a SegmenterConfig) -> Self {
        Self { rules, config }
    }

    /// Classify one line, in precedence order:
    ///
    /// 1. Short-text override: a trimmed line of at most
    ///    `short_line_max_tokens` tokens matching a question/greeting/command
    ///    or natural-language pattern is prose — unless a definite code-start
    ///    rule or a comment marker also matches, which win.
    /// 2. Comment markers (including block-comment openers) are code.
    /// 3. Definite code-start rules.
    /// 4. Code-continuation rules (tested against the trimmed line). These
    ///    only make sense as the tail of earlier code, so they apply only
    ///    when `in_code_run` is set; outside a run a continuation-shaped
    ///    line ("value," in a sentence, say) falls through to the prose arms.
    /// 5. A natural-language match longer than `prose_break_min_chars` is
    ///    explicit prose; everything else is prose by default.
    pub fn classify(&self, line: &str, in_code_run: bool) -> LineClass {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }

        let is_definite_code = self.rules.matches(RuleKind::CodeStart, line);
        let is_comment =
            self.rules.matches(RuleKind::Comment, line) || opens_block_comment(trimmed);

        if !is_definite_code && !is_comment && self.is_short_text(trimmed) {
            return LineClass::ProseExplicit;
        }
        if is_comment {
            return LineClass::Code;
        }
        if is_definite_code {
            return LineClass::Code;
        }
        if in_code_run && self.rules.matches(RuleKind::CodeContinuation, trimmed) {
            return LineClass::Code;
        }
        if self.rules.matches(RuleKind::NaturalLanguage, trimmed)
            && trimmed.len() > self.config.prose_break_min_chars
        {
            return LineClass::ProseExplicit;
        }
        LineClass::ProseDefault
    }

    /// The short-text override: few tokens and an explicit prose pattern.
    fn is_short_text(&self, trimmed: &str) -> bool {
        trimmed.split_whitespace().count() <= self.config.short_line_max_tokens
            && (self.rules.matches(RuleKind::ShortText, trimmed)
                || self.rules.matches(RuleKind::NaturalLanguage, trimmed))
    }
}

/// Whether a line opens a block comment that does not close on the same line.
pub(crate) fn opens_block_comment(trimmed: &str) -> bool {
    (trimmed.contains("/*") && !trimmed.contains("*/"))
        || (trimmed.contains("<!--") && !trimmed.contains("-->"))
}

/// Whether a line contains a block-comment terminator.
pub(crate) fn closes_block_comment(trimmed: &str) -> bool {
    trimmed.contains("*/") || trimmed.contains("-->")
}
