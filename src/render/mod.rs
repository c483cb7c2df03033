//! Renderer boundary.
//!
//! The classifier does not render; downstream UIs map prose segments to a
//! Markdown view and code segments to a syntax-highlighted read-only viewer.
//! This module pins down the contract that boundary must satisfy: rendering
//! and display-side reformatting are best-effort, fall back to the raw
//! segment content on failure, and never mutate [`Segment::content`].

mod reformat;

pub use reformat::{
    BraceReformatter, CodeReformatter, reformat_for_display, sanitize_code_artifacts,
};

use crate::segmenter::types::Segment;

/// Errors from rendering or reformatting a segment for display.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The renderer failed to produce output.
    #[error("render failed: {0}")]
    RenderFailed(String),
    /// Display-side reformatting could not lay the code out.
    #[error("reformat failed: {0}")]
    ReformatFailed(String),
}

/// Renders classified segments for display.
///
/// Implementations must be `Send + Sync` so independent chat messages can
/// render in parallel.
pub trait SegmentRenderer: Send + Sync {
    /// Render one segment. Errors are recoverable; callers fall back to the
    /// raw content via [`render_with_fallback`].
    fn render(&self, segment: &Segment) -> Result<String, RenderError>;
}

/// Render a segment, falling back to its raw content on failure.
///
/// Rendering failures must never propagate past the display boundary.
pub fn render_with_fallback(renderer: &dyn SegmentRenderer, segment: &Segment) -> String {
    match renderer.render(segment) {
        Ok(rendered) => rendered,
        Err(e) => {
            log::warn!("renderer failed, falling back to raw content: {e}");
            segment.content.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::types::SegmentKind;

    struct FailingRenderer;

    impl SegmentRenderer for FailingRenderer {
        fn render(&self, _segment: &Segment) -> Result<String, RenderError> {
            Err(RenderError::RenderFailed("no backend".into()))
        }
    }

    struct UppercaseRenderer;

    impl SegmentRenderer for UppercaseRenderer {
        fn render(&self, segment: &Segment) -> Result<String, RenderError> {
            Ok(segment.content.to_uppercase())
        }
    }

    #[test]
    fn test_fallback_returns_raw_content() {
        let seg = Segment::code("const a = 1;");
        assert_eq!(render_with_fallback(&FailingRenderer, &seg), "const a = 1;");
        assert_eq!(seg.content, "const a = 1;");
    }

    #[test]
    fn test_successful_render_passes_through() {
        let seg = Segment::prose("hello");
        assert_eq!(render_with_fallback(&UppercaseRenderer, &seg), "HELLO");
    }

    #[test]
    fn test_trait_object_safety() {
        let _r: Box<dyn SegmentRenderer> = Box::new(UppercaseRenderer);
        let _ = SegmentKind::Code;
    }

    #[test]
    fn test_render_error_display() {
        assert_eq!(
            RenderError::RenderFailed("bad input".into()).to_string(),
            "render failed: bad input"
        );
        assert_eq!(
            RenderError::ReformatFailed("unbalanced".into()).to_string(),
            "reformat failed: unbalanced"
        );
    }
}
