//! Fence and inline-span scanning.

use std::sync::OnceLock;

use regex::Regex;

use crate::segmenter::config::SegmenterConfig;
use crate::segmenter::types::Segment;

/// Single-backtick inline span.
fn inline_span_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"`([^`]+)`").expect("regex pattern is valid and should always compile")
    })
}

/// Run the explicit-delimiter pass.
///
/// Returns `None` when the blob contains neither a fence nor an inline span,
/// signalling that the heuristic pass should classify it instead. This pass
/// never inspects semantic content, only delimiter syntax.
pub fn extract(text: &str, config: &SegmenterConfig) -> Option<Vec<Segment>> {
    if let Some(segments) = extract_fenced(text, config) {
        return Some(segments);
    }
    extract_inline(text)
}

/// Parse an opening fence line: 3+ repetitions of ` or ~, then an optional
/// language tag (alphanumeric, hyphens, underscores, plus signs).
///
/// Returns the fence character and the declared tag.
fn parse_opening_fence(line: &str) -> Option<(char, Option<&str>)> {
    let trimmed = line.trim();
    let ch = if trimmed.starts_with("```") {
        '`'
    } else if trimmed.starts_with("~~~") {
        '~'
    } else {
        return None;
    };

    let fence_len = trimmed.len() - trimmed.trim_start_matches(ch).len();
    let rest = trimmed[fence_len..].trim();
    if rest.is_empty() {
        Some((ch, None))
    } else if rest
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '+')
    {
        Some((ch, Some(rest)))
    } else {
        // Trailing content that is not a language tag: not a fence.
        None
    }
}

/// Whether `line` closes a fence opened with `ch`: 3+ repetitions of the same
/// character and nothing else but whitespace.
fn is_closing_fence(line: &str, ch: char) -> bool {
    let trimmed = line.trim();
    let fence_len = trimmed.len() - trimmed.trim_start_matches(ch).len();
    fence_len >= 3 && trimmed[fence_len..].trim().is_empty()
}

/// Scan for fenced regions. Returns `None` when the blob has no fence at all.
fn extract_fenced(text: &str, config: &SegmenterConfig) -> Option<Vec<Segment>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut segments = Vec::new();
    let mut prose: Vec<&str> = Vec::new();
    let mut found_fence = false;
    let mut i = 0;

    while i < lines.len() {
        let Some((ch, tag)) = parse_opening_fence(lines[i]) else {
            prose.push(lines[i]);
            i += 1;
            continue;
        };

        found_fence = true;
        flush_prose(&mut segments, &mut prose);

        let language = tag
            .unwrap_or(config.default_fence_language.as_str())
            .to_string();
        let mut body: Vec<&str> = Vec::new();
        let mut closed = false;
        i += 1;
        while i < lines.len() {
            if is_closing_fence(lines[i], ch) {
                closed = true;
                i += 1;
                break;
            }
            body.push(lines[i]);
            i += 1;
        }

        if !closed {
            log::debug!("unterminated {ch} fence; taking remainder as code");
        }

        // Leading/trailing blank lines belong to the fence syntax, not the code.
        let content = trim_blank_edges(&body).join("\n");
        if !content.is_empty() {
            segments.push(Segment::code_with_language(content, language));
        }
    }

    if !found_fence {
        return None;
    }
    flush_prose(&mut segments, &mut prose);
    Some(segments)
}

/// Scan for inline spans. Returns `None` when the blob has no span.
fn extract_inline(text: &str) -> Option<Vec<Segment>> {
    let re = inline_span_regex();
    if !re.is_match(text) {
        return None;
    }

    let mut segments = Vec::new();
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let whole = caps.get(0).expect("group 0 always present");
        let span = caps.get(1).expect("capture group 1 is in the pattern");
        let before = &text[last..whole.start()];
        if !before.trim().is_empty() {
            segments.push(Segment::prose(before.trim()));
        }
        segments.push(Segment::inline_code(span.as_str()));
        last = whole.end();
    }
    let after = &text[last..];
    if !after.trim().is_empty() {
        segments.push(Segment::prose(after.trim()));
    }
    Some(segments)
}

/// Flush accumulated prose lines into a segment, skipping whitespace-only runs.
fn flush_prose(segments: &mut Vec<Segment>, prose: &mut Vec<&str>) {
    if prose.is_empty() {
        return;
    }
    let content = prose.join("\n").trim().to_string();
    prose.clear();
    if !content.is_empty() {
        segments.push(Segment::prose(content));
    }
}

/// Strip leading and trailing blank lines.
fn trim_blank_edges<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |p| p + 1);
    lines[start..end].to_vec()
}
