//! The text/code segmentation classifier.
//!
//! Splits one text blob into an ordered list of [`Segment`]s tagged prose or
//! code. Two passes, in strict precedence order:
//!
//! 1. [`fenced`] — explicit delimiters (triple-backtick/tilde fences, then
//!    single-backtick inline spans). Unambiguous, so it always wins: if any
//!    explicit marker exists in the blob, the heuristic pass never runs.
//! 2. [`heuristic`] — per-line classification against the [`rules`] tables
//!    plus run-level smoothing, for blobs with no explicit delimiters.
//!
//! The passes feed a merge/normalize step that collapses adjacent same-kind
//! segments so no two consecutive segments share a kind.
//!
//! ## Module layout
//!
//! - [`types`] — `Segment`, `SegmentKind`, `ClassificationRule` and friends.
//! - [`config`] — `SegmenterConfig`: the named tunables.
//! - [`rules`] — built-in rule tables grouped by dialect, the rule-set
//!   builder, and the YAML user-rule loader.
//! - [`fenced`] — explicit delimiter extraction.
//! - [`heuristic`] — line classifier and code-run scanner.
//! - [`pipeline`] — `Segmenter`: ties the passes together.

pub mod config;
pub mod fenced;
pub mod heuristic;
pub mod pipeline;
pub mod rules;
pub mod types;

pub use config::SegmenterConfig;
pub use pipeline::{Segmenter, segment};
pub use rules::{RuleSet, RuleSetBuilder};
pub use types::{ClassificationRule, Dialect, RuleKind, RuleSource, Segment, SegmentKind};
