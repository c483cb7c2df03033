//! Tests for the line classifier and the run scanner.

use super::classifier::{LineClass, LineClassifier};
use super::scan;
use crate::segmenter::config::SegmenterConfig;
use crate::segmenter::rules::RuleSet;
use crate::segmenter::types::{Segment, SegmentKind};

fn classify(line: &str) -> LineClass {
    let rules = RuleSet::built_in();
    let config = SegmenterConfig::default();
    LineClassifier::new(&rules, &config).classify(line, false)
}

fn classify_in_run(line: &str) -> LineClass {
    let rules = RuleSet::built_in();
    let config = SegmenterConfig::default();
    LineClassifier::new(&rules, &config).classify(line, true)
}

fn run(text: &str) -> Vec<Segment> {
    let rules = RuleSet::built_in();
    let config = SegmenterConfig::default();
    scan(text, &rules, &config)
}

// -----------------------------------------------------------------------
// Per-line precedence
// -----------------------------------------------------------------------

#[test]
fn test_short_question_is_explicit_prose() {
    assert_eq!(classify("How are you?"), LineClass::ProseExplicit);
    assert_eq!(classify("what is this?"), LineClass::ProseExplicit);
    assert_eq!(classify("Explain:"), LineClass::ProseExplicit);
}

#[test]
fn test_definite_code_beats_short_text() {
    // Short and question-ish, but the trailing semicolon is a definite
    // code-start signal.
    assert_eq!(classify("do(x);"), LineClass::Code);
    assert_eq!(classify("if (a) { b(); }"), LineClass::Code);
}

#[test]
fn test_comment_markers_are_code_even_when_prose_like() {
    assert_eq!(classify("// this explains the next line"), LineClass::Code);
    assert_eq!(classify("# How does this work?"), LineClass::Code);
    assert_eq!(classify("/* start of a longer note"), LineClass::Code);
}

#[test]
fn test_continuation_shapes_are_code_inside_a_run() {
    assert_eq!(classify_in_run(".then(res => res.json())"), LineClass::Code);
    assert_eq!(classify_in_run("} else {"), LineClass::Code);
    assert_eq!(classify_in_run("= 42;"), LineClass::Code);
}

#[test]
fn test_continuation_shapes_are_not_code_outside_a_run() {
    // "value," is an identifier followed by punctuation, a continuation
    // shape; in running text it must not open a code run.
    assert_eq!(classify_in_run("value,"), LineClass::Code);
    assert_eq!(classify("value,"), LineClass::ProseDefault);
}

#[test]
fn test_long_natural_language_is_explicit_prose() {
    assert_eq!(
        classify("This function checks whether the feature is supported."),
        LineClass::ProseExplicit
    );
}

#[test]
fn test_unmatched_line_is_default_prose() {
    assert_eq!(classify("totally unclassifiable words"), LineClass::ProseDefault);
    assert_eq!(classify(""), LineClass::Blank);
    assert_eq!(classify("   "), LineClass::Blank);
}

// -----------------------------------------------------------------------
// Run smoothing
// -----------------------------------------------------------------------

#[test]
fn test_pure_code_single_segment() {
    let segs = run("const x = [1,2,3];\nconsole.log(x);");
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].kind, SegmentKind::Code);
    assert_eq!(segs[0].content, "const x = [1,2,3];\nconsole.log(x);");
}

#[test]
fn test_comment_between_code_lines_keeps_run_open() {
    let segs = run("const a = 1;\n// add the rest\nconst b = 2;");
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].kind, SegmentKind::Code);
}

#[test]
fn test_block_comment_spans_lines_as_code() {
    let text = "function f() {\n/*\n  What does this even do?\n*/\nreturn 1;\n}";
    let segs = run(text);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].kind, SegmentKind::Code);
}

#[test]
fn test_single_ambiguous_line_stays_in_run() {
    // "done here" matches nothing; with the default threshold of 2 a single
    // ambiguous line folds back into the run when code follows.
    let segs = run("const a = 1;\ndone here\nconst b = 2;");
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].kind, SegmentKind::Code);
    assert!(segs[0].content.contains("done here"));
}

#[test]
fn test_consecutive_ambiguous_lines_break_run() {
    let segs = run("const a = 1;\nplain words one\nplain words two\nmore words after");
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].kind, SegmentKind::Code);
    assert_eq!(segs[0].content, "const a = 1;");
    assert_eq!(segs[1].kind, SegmentKind::Prose);
}

#[test]
fn test_explicit_prose_breaks_run_immediately() {
    let segs = run("const a = 1;\nwhat is this?");
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].kind, SegmentKind::Code);
    assert_eq!(segs[1], Segment::prose("what is this?"));
}

#[test]
fn test_blank_lines_do_not_break_run() {
    let segs = run("const a = 1;\n\n\nconst b = 2;");
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].kind, SegmentKind::Code);
}

#[test]
fn test_trailing_pending_lines_end_as_prose() {
    let segs = run("const a = 1;\ntrailing words");
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].kind, SegmentKind::Code);
    assert_eq!(segs[1].kind, SegmentKind::Prose);
    assert_eq!(segs[1].content.trim(), "trailing words");
}

#[test]
fn test_all_prose_single_segment() {
    let segs = run("Plain words here.\nMore plain words follow them.");
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].kind, SegmentKind::Prose);
}

#[test]
fn test_threshold_one_breaks_on_first_ambiguous_line() {
    let rules = RuleSet::built_in();
    let config = SegmenterConfig {
        code_run_break_threshold: 1,
        ..SegmenterConfig::default()
    };
    let segs = scan("const a = 1;\ndone here\nconst b = 2;", &rules, &config);
    assert_eq!(segs.len(), 3);
    assert_eq!(segs[0].kind, SegmentKind::Code);
    assert_eq!(segs[1].kind, SegmentKind::Prose);
    assert_eq!(segs[2].kind, SegmentKind::Code);
}
