//! Natural-language and short-text patterns.
//!
//! `NaturalLanguage` rules flag explanatory sentences; `ShortText` rules flag
//! interrogatives, greetings, and single-word commands for the short-line
//! prose override.

use super::built_in_rule;
use crate::segmenter::types::{ClassificationRule, Dialect, RuleKind};

/// The natural-language table.
pub fn rules() -> Vec<ClassificationRule> {
    use Dialect::Generic;
    use RuleKind::{NaturalLanguage, ShortText};

    vec![
        built_in_rule(
            "nl_sentence_opener",
            r"(?i)^(this|the|here|in|when|you|we|it|they)\b",
            NaturalLanguage,
            Generic,
            "Common English sentence opener",
        ),
        built_in_rule(
            "nl_example",
            r"(?i)^(for example|for instance|such as|like|including|you can|we can|it can|they can)\b",
            NaturalLanguage,
            Generic,
            "Example/enumeration phrasing",
        ),
        built_in_rule(
            "nl_verb_opener",
            r"(?i)^(explains?|shows?|demonstrates?|checks?|uses?|calls?|returns?|handles?|provides?|creates?|implements?|allows?|enables?|supports?)\b",
            NaturalLanguage,
            Generic,
            "Explanatory verb opener",
        ),
        built_in_rule(
            "nl_note",
            r"(?i)^(note|remember|important|warning|tip|consider|keep in mind)\b",
            NaturalLanguage,
            Generic,
            "Advisory opener",
        ),
        built_in_rule(
            "nl_request",
            r"(?i)^(please|could you|can you|would you|help me|i need|i want)\b",
            NaturalLanguage,
            Generic,
            "Request phrasing",
        ),
        built_in_rule(
            "nl_compat_phrase",
            r"(?i)(may not be fully supported|browser\s+compatibility\s+with|javascript\s+snippet)",
            NaturalLanguage,
            Generic,
            "Compatibility-report phrasing typical of assistant replies",
        ),
        built_in_rule(
            "nl_however",
            r"(?i)^however,?\s",
            NaturalLanguage,
            Generic,
            "Contrast connective opener",
        ),
        // Short-text override patterns.
        built_in_rule(
            "st_interrogative",
            r"(?i)^(what|how|why|when|where|which|who|can|could|would|should|is|are|does|do|did)\s+",
            ShortText,
            Generic,
            "Interrogative opener",
        ),
        built_in_rule(
            "st_question_mark",
            r"\?$",
            ShortText,
            Generic,
            "Trailing question mark",
        ),
        built_in_rule(
            "st_command_word",
            r"(?i)^(explain|describe|tell|show|help|please|thanks|thank you|ok|okay|yes|no)\s*:?$",
            ShortText,
            Generic,
            "Single-word command or acknowledgement",
        ),
        built_in_rule(
            "st_greeting",
            r"(?i)^(hi|hello|hey)\b",
            ShortText,
            Generic,
            "Greeting opener",
        ),
    ]
}
