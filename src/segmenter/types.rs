//! Core data types for the segmentation classifier.

use serde::{Deserialize, Serialize};

/// Whether a segment should be rendered as Markdown prose or as code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Natural-language text, rendered through a Markdown view.
    Prose,
    /// Source code, rendered in a syntax-highlighted read-only viewer.
    Code,
}

/// A contiguous span of classified text.
///
/// Segments are produced in input order. After normalization no two
/// consecutive segments share the same kind (with one exception: fenced code
/// blocks declaring different languages stay separate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Prose or code.
    pub kind: SegmentKind,
    /// The classified text, boundary whitespace trimmed. Renderers must not
    /// mutate this; display-side reformatting works on a copy.
    pub content: String,
    /// Language tag, present only when an explicit fence declared one.
    /// Heuristically classified code carries no hint and consumers fall back
    /// to a generic script-language highlighter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// True for single-backtick inline code spans.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inline: bool,
}

impl Segment {
    /// A prose segment.
    pub fn prose(content: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Prose,
            content: content.into(),
            language: None,
            inline: false,
        }
    }

    /// A block code segment with no language hint.
    pub fn code(content: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Code,
            content: content.into(),
            language: None,
            inline: false,
        }
    }

    /// A block code segment with an explicit language tag.
    pub fn code_with_language(content: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Self::code(content)
        }
    }

    /// An inline code span.
    pub fn inline_code(content: impl Into<String>) -> Self {
        Self {
            inline: true,
            ..Self::code(content)
        }
    }
}

/// What a classification rule signals when its pattern matches a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// A definite code start: declaration/control-flow keyword, well-known
    /// global access, markup tag, selector brace, query keyword, trailing
    /// statement punctuation.
    CodeStart,
    /// A line that only makes sense as the continuation of a preceding code
    /// line (leading operator, chained `.call(`, `} else {`, ...).
    CodeContinuation,
    /// A single-line comment marker. Comments are always code so they stay
    /// attached to the block they document.
    Comment,
    /// Explicit natural language (sentence openers, explanatory phrasing).
    NaturalLanguage,
    /// Interrogatives, greetings, and single-word commands that mark a short
    /// line as prose regardless of code-like substrings.
    ShortText,
}

/// Source dialect a rule belongs to. Grouping only — evaluation is identical
/// across dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Script-language statements and well-known global objects (JS/TS).
    Script,
    /// Markup tag open/close patterns (HTML/XML).
    Markup,
    /// Stylesheet selectors, at-rules, and property declarations (CSS).
    Stylesheet,
    /// Query-language leading keywords (SQL).
    Query,
    /// Dialect-independent rules: comment markers, natural language.
    Generic,
}

/// Origin of a classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSource {
    /// Shipped with the crate; can be disabled but not deleted.
    BuiltIn,
    /// Merged in from a user rule file.
    UserDefined,
}

/// A named predicate over a single line of text.
///
/// `Clone` is not derived because `regex::Regex` does not clone cheaply;
/// identify rules by `id` instead.
#[derive(Debug)]
pub struct ClassificationRule {
    /// Unique ID (for enable/disable and user overrides).
    pub id: String,
    /// The compiled pattern, tested against one line.
    pub pattern: regex::Regex,
    /// What a match signals.
    pub kind: RuleKind,
    /// Which dialect group the rule belongs to.
    pub dialect: Dialect,
    /// Built-in or user-defined.
    pub source: RuleSource,
    /// Human-readable description.
    pub description: String,
    /// Whether this rule participates in classification.
    pub enabled: bool,
}
