//! Prose/code segmentation for AI chat responses.
//!
//! Takes one raw text blob (an AI completion or a user chat turn) and produces
//! an ordered sequence of typed segments, so a chat UI can hand prose to a
//! Markdown view and code to a syntax-highlighted read-only viewer.
//!
//! # Module Structure
//!
//! - [`segmenter`] — the classifier itself: fenced/inline extraction, the
//!   heuristic line classifier, rule tables, and the [`Segmenter`] pipeline.
//! - [`render`] — the renderer boundary: [`SegmentRenderer`] trait, best-effort
//!   code reformatting, and the raw-text fallback contract.
//! - [`annotations`] — pass-through suggestion/polyfill records carrying
//!   optional file path / line number fields supplied by upstream callers.
//!
//! # Quick start
//!
//! ```
//! use code_segmenter::{segment, SegmentKind};
//!
//! let segs = segment("Here is the fix:\n```js\nconst a = 1;\n```\nDone.");
//! assert_eq!(segs.len(), 3);
//! assert_eq!(segs[1].kind, SegmentKind::Code);
//! assert_eq!(segs[1].language.as_deref(), Some("js"));
//! ```
//!
//! Segmentation is pure and deterministic: no I/O, no state retained between
//! calls, and it never fails for any input string.

/// Crate version, for callers that surface it in diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod annotations;
pub mod render;
pub mod segmenter;

pub use annotations::{Polyfill, Suggestion};
pub use render::{RenderError, SegmentRenderer};
pub use segmenter::{Segment, SegmentKind, Segmenter, SegmenterConfig, segment};
