//! `Segmenter` — explicit-delimiter pass, heuristic pass, merge/normalize.

use super::config::SegmenterConfig;
use super::fenced;
use super::heuristic;
use super::rules::{RuleError, RuleSet, loader};
use super::types::{Segment, SegmentKind};

/// The segmentation classifier.
///
/// Owns a rule set and configuration; [`Segmenter::segment`] is pure and
/// restartable — no state survives a call, and one instance may be shared
/// across threads for independent blobs.
#[derive(Debug, Default)]
pub struct Segmenter {
    rules: RuleSet,
    config: SegmenterConfig,
}

impl Segmenter {
    /// A segmenter with built-in rules and default tunables.
    pub fn new() -> Self {
        Self::default()
    }

    /// A segmenter with built-in rules and custom tunables.
    pub fn with_config(config: SegmenterConfig) -> Self {
        Self {
            rules: RuleSet::built_in(),
            config,
        }
    }

    /// A segmenter over an explicit rule set.
    pub fn with_rules(rules: RuleSet, config: SegmenterConfig) -> Self {
        Self { rules, config }
    }

    /// Merge a YAML rule file (additional rules and overrides) into this
    /// segmenter's rule set.
    pub fn load_rule_file(&mut self, yaml: &str) -> Result<(), RuleError> {
        loader::apply_rule_file(&mut self.rules, yaml)
    }

    /// The active configuration.
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// The active rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Split a blob into ordered prose/code segments.
    ///
    /// Never fails: empty input yields no segments, and input that matches
    /// nothing yields one prose segment equal to the trimmed input.
    pub fn segment(&self, text: &str) -> Vec<Segment> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let raw = fenced::extract(text, &self.config)
            .unwrap_or_else(|| heuristic::scan(text, &self.rules, &self.config));
        let segments = normalize(raw);
        log::debug!(
            "segmented {} bytes into {} segments",
            text.len(),
            segments.len()
        );
        segments
    }
}

/// Segment with default rules and tunables.
///
/// Convenience wrapper; construct a [`Segmenter`] once when classifying many
/// blobs, since rule compilation is not free.
pub fn segment(text: &str) -> Vec<Segment> {
    Segmenter::new().segment(text)
}

/// Trim boundary whitespace, drop empty segments, and merge adjacent
/// same-kind segments.
///
/// Merging requires compatible language tags (equal, or one side absent);
/// fenced blocks declaring different languages stay separate. Inline spans
/// never merge.
fn normalize(raw: Vec<Segment>) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::new();
    for mut seg in raw {
        seg.content = seg.content.trim().to_string();
        if seg.content.is_empty() {
            continue;
        }
        if let Some(last) = out.last_mut()
            && last.kind == seg.kind
            && !last.inline
            && !seg.inline
            && languages_compatible(last.language.as_deref(), seg.language.as_deref())
        {
            last.content.push('\n');
            last.content.push_str(&seg.content);
            if last.language.is_none() {
                last.language = seg.language;
            }
            continue;
        }
        out.push(seg);
    }

    debug_assert!(
        out.windows(2).all(|w| w[0].kind != w[1].kind
            || w[0].inline
            || w[1].inline
            || w[0].kind == SegmentKind::Code && w[0].language != w[1].language),
        "adjacent same-kind segments survived normalization"
    );
    out
}

fn languages_compatible(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_input() {
        let s = Segmenter::new();
        assert!(s.segment("").is_empty());
        assert!(s.segment("   \n\t\n").is_empty());
    }

    #[test]
    fn test_entirely_prose_is_one_trimmed_segment() {
        let s = Segmenter::new();
        let segs = s.segment("  Just words, nothing else.\n");
        assert_eq!(segs, vec![Segment::prose("Just words, nothing else.")]);
    }

    #[test]
    fn test_normalize_merges_adjacent_same_kind() {
        let merged = normalize(vec![
            Segment::prose("one"),
            Segment::prose("  two  "),
            Segment::code("a();"),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].content, "one\ntwo");
    }

    #[test]
    fn test_normalize_keeps_differently_tagged_code_apart() {
        let kept = normalize(vec![
            Segment::code_with_language("a();", "js"),
            Segment::code_with_language(".x { }", "css"),
        ]);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_normalize_adopts_language_from_merge() {
        let merged = normalize(vec![
            Segment::code("a();"),
            Segment::code_with_language("b();", "js"),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].language.as_deref(), Some("js"));
    }

    #[test]
    fn test_garbage_input_never_panics() {
        let s = Segmenter::new();
        for blob in [
            "\u{0}\u{1}\u{2}binary\u{fffd}",
            "```",
            "`````",
            "``a``b``",
            "\n\n\n`\n\n",
            "~~~~",
        ] {
            let _ = s.segment(blob);
        }
    }
}
