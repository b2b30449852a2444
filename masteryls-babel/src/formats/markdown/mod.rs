//! Markdown format implementation
//!
//!     Quiz blocks are fenced code blocks whose info string starts with the word
//!     `masteryls`. Fence scanning lives in the parser crate; this format only adapts it to
//!     the [Format] interface. Rendering keeps the document as markdown: quiz fences become
//!     raw HTML blocks, which every CommonMark renderer passes through.

use crate::error::FormatError;
use crate::format::Format;
use masteryls_parser::masteryls::extraction::fenced_blocks;
use masteryls_parser::{QuizCandidate, QUIZ_LANGUAGE};

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown source; quiz fences are replaced by markup in place"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn candidates(&self, source: &str) -> Result<Vec<QuizCandidate>, FormatError> {
        Ok(fenced_blocks(source)
            .into_iter()
            .filter(|block| block.language() == Some(QUIZ_LANGUAGE))
            .map(|block| QuizCandidate {
                span: block.span,
                payload: block.content,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masteryls_parser::{replace_quiz_blocks, RenderContext};

    #[test]
    fn test_markdown_format_name() {
        assert_eq!(MarkdownFormat.name(), "markdown");
    }

    #[test]
    fn test_candidates_skip_other_languages() {
        let source = "```rust\nfn f() {}\n```\n```masteryls\n- [x] a\n```\n";
        let candidates = MarkdownFormat.candidates(source).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].payload, "- [x] a\n");
        assert_eq!(&source[candidates[0].span.clone()], "```masteryls\n- [x] a\n```");
    }

    #[test]
    fn test_render_matches_parser_extraction() {
        let source = "# T\n\n```masteryls\n{\"id\":\"q\"}\n- [x] a\n```\n";
        let rendered = MarkdownFormat
            .render(source, &mut RenderContext::default())
            .unwrap();
        let direct = replace_quiz_blocks(source, &mut RenderContext::default());
        assert_eq!(rendered, direct);
    }
}
