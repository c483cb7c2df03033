//! Best-effort code reformatting for display.
//!
//! Model responses sometimes leak markup into code blocks: fence markers,
//! HTML tags, entities. [`sanitize_code_artifacts`] strips those, and
//! [`BraceReformatter`] re-indents by brace depth. Both operate on copies —
//! the classifier's stored content is never touched — and callers fall back
//! to the raw text when reformatting fails.

use std::sync::OnceLock;

use regex::Regex;

use super::RenderError;

fn html_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"</?[^>]*>").expect("regex pattern is valid and should always compile")
    })
}

fn html_entity_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"&[a-zA-Z0-9#]+;").expect("regex pattern is valid and should always compile")
    })
}

fn fence_artifact_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"```[\w]*\n?").expect("regex pattern is valid and should always compile")
    })
}

/// Strip markup artifacts that leak into code blocks.
pub fn sanitize_code_artifacts(code: &str) -> String {
    let cleaned = fence_artifact_regex().replace_all(code, "");
    let cleaned = html_tag_regex().replace_all(&cleaned, "");
    let cleaned = html_entity_regex().replace_all(&cleaned, "");
    cleaned.trim().to_string()
}

/// Reformats a code segment's text for display.
pub trait CodeReformatter: Send + Sync {
    /// Produce display text from `code`. Errors mean "show the raw text",
    /// never "fail the render".
    fn reformat(&self, code: &str) -> Result<String, RenderError>;
}

/// Indentation-only reformatter driven by bracket depth.
///
/// Re-indents each line to its enclosing `{`/`(`/`[` depth. Refuses snippets
/// that close more scopes than they open, since no consistent layout exists
/// for those; callers fall back to the raw text.
#[derive(Debug, Clone)]
pub struct BraceReformatter {
    /// Spaces per indent level.
    pub indent: usize,
}

impl Default for BraceReformatter {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl CodeReformatter for BraceReformatter {
    fn reformat(&self, code: &str) -> Result<String, RenderError> {
        let mut depth: usize = 0;
        let mut out = Vec::new();

        for line in code.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                out.push(String::new());
                continue;
            }

            // Closers at the start of a line dedent that line itself.
            let leading_closers = trimmed
                .chars()
                .take_while(|c| matches!(c, '}' | ')' | ']'))
                .count();
            let line_depth = depth
                .checked_sub(leading_closers)
                .ok_or_else(|| RenderError::ReformatFailed("unbalanced brackets".into()))?;

            out.push(format!("{}{}", " ".repeat(self.indent * line_depth), trimmed));

            let opens = trimmed.chars().filter(|c| matches!(c, '{' | '(' | '[')).count();
            let closes = trimmed.chars().filter(|c| matches!(c, '}' | ')' | ']')).count();
            depth = (depth + opens)
                .checked_sub(closes)
                .ok_or_else(|| RenderError::ReformatFailed("unbalanced brackets".into()))?;
        }

        Ok(out.join("\n"))
    }
}

/// Sanitize and reformat code for display, falling back to the raw text.
pub fn reformat_for_display(reformatter: &dyn CodeReformatter, code: &str) -> String {
    let sanitized = sanitize_code_artifacts(code);
    match reformatter.reformat(&sanitized) {
        Ok(formatted) => formatted,
        Err(e) => {
            log::debug!("reformat failed, showing raw code: {e}");
            code.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_markup() {
        let dirty = "```js\n<span class=\"token\">const</span> a = 1; &amp;\n```";
        assert_eq!(sanitize_code_artifacts(dirty), "const a = 1;");
    }

    #[test]
    fn test_reformat_indents_by_depth() {
        let code = "function f() {\nif (a) {\nreturn 1;\n}\n}";
        let formatted = BraceReformatter::default()
            .reformat(code)
            .expect("balanced code reformats");
        assert_eq!(
            formatted,
            "function f() {\n  if (a) {\n    return 1;\n  }\n}"
        );
    }

    #[test]
    fn test_unbalanced_code_is_an_error() {
        assert!(BraceReformatter::default().reformat("}\n{").is_err());
    }

    #[test]
    fn test_display_fallback_keeps_raw_text() {
        let code = "} else {";
        assert_eq!(
            reformat_for_display(&BraceReformatter::default(), code),
            code
        );
    }
}
