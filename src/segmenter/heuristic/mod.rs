//! Heuristic line classification for blobs with no explicit delimiters.
//!
//! [`classifier`] decides one line at a time in strict precedence order;
//! [`scanner`] applies run-level smoothing on top so a single ambiguous line
//! cannot shatter a logical code block into fragments.

mod classifier;
mod scanner;
#[cfg(test)]
mod tests;

pub use classifier::{LineClass, LineClassifier};
pub use scanner::scan;
