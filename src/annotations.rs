//! Pass-through annotation records.
//!
//! Upstream callers receive structured suggestion and polyfill records from
//! the model alongside free-form text. The optional file path / line number
//! fields accompany a code segment in the UI but are never derived by the
//! classifier — they ride through untouched. Field names follow the
//! camelCase wire schema of the upstream service.

use serde::{Deserialize, Serialize};

/// A compatible-code suggestion for a flagged snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// File the suggestion applies to; present only when a whole repository
    /// was analyzed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// 1-based line number within `file_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
    /// The compatible code snippet.
    pub code: String,
    /// Why the original code is incompatible and how this fixes it.
    pub explanation: String,
}

/// A polyfill for a feature the target environment lacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polyfill {
    /// File the polyfill is needed in; present only when a whole repository
    /// was analyzed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// 1-based line number within `file_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
    /// The polyfill snippet, or a comment explaining why none is needed.
    pub code: String,
    /// What the polyfill does and which feature it covers.
    pub explanation: String,
}
