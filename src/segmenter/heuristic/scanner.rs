//! Run-level smoothing over per-line classifications.
//!
//! Scans top to bottom carrying two bits of state: whether a code run is
//! open, and whether a block comment is open. Ambiguous prose lines inside a
//! code run are held in a pending buffer: a following code line folds them
//! back into the run, while explicit natural language (or enough consecutive
//! ambiguous lines) flushes them out as prose and ends the run.

use super::classifier::{LineClass, LineClassifier, closes_block_comment, opens_block_comment};
use crate::segmenter::config::SegmenterConfig;
use crate::segmenter::rules::RuleSet;
use crate::segmenter::types::{Segment, SegmentKind};

/// Classify a blob with no explicit delimiters into raw segments.
///
/// Output is alternating prose/code by construction; contents still carry
/// boundary whitespace and are normalized by the pipeline's merge step.
pub fn scan(text: &str, rules: &RuleSet, config: &SegmenterConfig) -> Vec<Segment> {
    let classifier = LineClassifier::new(rules, config);
    let mut state = ScanState::new(config.code_run_break_threshold);

    for line in text.lines() {
        if state.inside_block_comment {
            // Every line is code until the comment terminator.
            state.push_code(line);
            if closes_block_comment(line.trim()) {
                state.inside_block_comment = false;
            }
            continue;
        }

        match classifier.classify(line, state.in_code_run()) {
            LineClass::Blank => state.push_blank(line),
            LineClass::Code => {
                state.push_code(line);
                if opens_block_comment(line.trim()) {
                    state.inside_block_comment = true;
                }
            }
            LineClass::ProseExplicit => state.push_prose_explicit(line),
            LineClass::ProseDefault => state.push_prose_default(line),
        }
    }

    state.finish()
}

/// Accumulator for the scan.
struct ScanState {
    /// Completed segments, alternating kinds.
    segments: Vec<(SegmentKind, Vec<String>)>,
    /// The open segment, if any.
    current: Option<(SegmentKind, Vec<String>)>,
    /// Ambiguous lines held while a code run is open.
    pending: Vec<String>,
    /// Non-blank lines currently pending.
    pending_count: usize,
    /// Consecutive ambiguous lines that end a code run.
    break_threshold: usize,
    /// Open block comment spans every line as code.
    inside_block_comment: bool,
}

impl ScanState {
    fn new(break_threshold: usize) -> Self {
        Self {
            segments: Vec::new(),
            current: None,
            pending: Vec::new(),
            pending_count: 0,
            // A threshold of zero would break a run before it could absorb
            // anything; clamp to one.
            break_threshold: break_threshold.max(1),
            inside_block_comment: false,
        }
    }

    fn in_code_run(&self) -> bool {
        matches!(self.current, Some((SegmentKind::Code, _)))
    }

    /// Blank lines stick to the pending buffer when one is forming, else to
    /// the open segment. They never open a segment or change run state.
    fn push_blank(&mut self, line: &str) {
        if !self.pending.is_empty() {
            self.pending.push(line.to_string());
        } else if let Some((_, lines)) = self.current.as_mut() {
            lines.push(line.to_string());
        }
    }

    fn push_code(&mut self, line: &str) {
        if self.in_code_run() {
            // Ambiguous lines between two code lines belong to the run.
            self.reclaim_pending_into_code();
            if let Some((_, lines)) = self.current.as_mut() {
                lines.push(line.to_string());
            }
        } else {
            self.open(SegmentKind::Code, line);
        }
    }

    fn push_prose_explicit(&mut self, line: &str) {
        if self.in_code_run() {
            log::trace!("code run ends at explicit prose: {:?}", line.trim());
            let pending = std::mem::take(&mut self.pending);
            self.pending_count = 0;
            self.flush_current();
            let mut lines = pending;
            lines.push(line.to_string());
            self.current = Some((SegmentKind::Prose, lines));
        } else {
            self.append_prose(line);
        }
    }

    fn push_prose_default(&mut self, line: &str) {
        if self.in_code_run() {
            self.pending.push(line.to_string());
            self.pending_count += 1;
            if self.pending_count >= self.break_threshold {
                log::trace!(
                    "code run ends after {} consecutive non-code lines",
                    self.pending_count
                );
                let pending = std::mem::take(&mut self.pending);
                self.pending_count = 0;
                self.flush_current();
                self.current = Some((SegmentKind::Prose, pending));
            }
        } else {
            self.append_prose(line);
        }
    }

    /// Append to the open prose segment or start one.
    fn append_prose(&mut self, line: &str) {
        match self.current.as_mut() {
            Some((SegmentKind::Prose, lines)) => lines.push(line.to_string()),
            _ => self.open(SegmentKind::Prose, line),
        }
    }

    fn open(&mut self, kind: SegmentKind, line: &str) {
        self.flush_current();
        self.current = Some((kind, vec![line.to_string()]));
    }

    fn reclaim_pending_into_code(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        if let Some((_, lines)) = self.current.as_mut() {
            lines.append(&mut self.pending);
        }
        self.pending_count = 0;
    }

    fn flush_current(&mut self) {
        if let Some(seg) = self.current.take() {
            self.segments.push(seg);
        }
    }

    /// Close out the scan. Unresolved pending lines were classified prose and
    /// no code line reclaimed them, so they end as a trailing prose segment.
    fn finish(mut self) -> Vec<Segment> {
        let pending = std::mem::take(&mut self.pending);
        self.flush_current();
        if !pending.is_empty() {
            self.segments.push((SegmentKind::Prose, pending));
        }

        self.segments
            .into_iter()
            .map(|(kind, lines)| match kind {
                SegmentKind::Prose => Segment::prose(lines.join("\n")),
                SegmentKind::Code => Segment::code(lines.join("\n")),
            })
            .collect()
    }
}
