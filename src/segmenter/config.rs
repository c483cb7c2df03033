//! Configuration for the [`Segmenter`](super::pipeline::Segmenter).

/// Named tunables for the heuristic classifier.
///
/// The source behavior this consolidates shipped several variants with
/// diverging thresholds; these fields replace the forks with one documented
/// knob each.
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    /// Maximum whitespace-separated tokens for the short-text override: a
    /// trimmed line at or under this length that matches an interrogative,
    /// greeting, or single-word-command pattern is prose unless a definite
    /// code-start rule also matches.
    pub short_line_max_tokens: usize,
    /// Consecutive default-classified prose lines required to break an open
    /// code run. Held lines fold back into the run if a code line arrives
    /// before the threshold is reached.
    pub code_run_break_threshold: usize,
    /// Minimum trimmed length for a natural-language rule match to break a
    /// code run on its own. Shorter matches are treated as ambiguous and
    /// held like default-prose lines.
    pub prose_break_min_chars: usize,
    /// Language recorded for fenced blocks that declare no tag.
    pub default_fence_language: String,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            short_line_max_tokens: 5,
            code_run_break_threshold: 2,
            prose_break_min_chars: 20,
            default_fence_language: "javascript".to_string(),
        }
    }
}
