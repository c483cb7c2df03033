//! Explicit delimiter extraction.
//!
//! Scans a blob for triple-marker fenced regions (``` or ~~~, optional
//! language tag) and, failing that, single-backtick inline spans. Explicit
//! delimiters are unambiguous, so when any exist the heuristic classifier
//! never runs on the blob.

mod extractor;

pub use extractor::extract;
