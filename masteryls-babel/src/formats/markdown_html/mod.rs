//! Markdown to HTML pipeline
//!
//!     For sites that publish HTML straight from markdown: comrak renders the whole document,
//!     then the [HtmlFormat] replaces the quiz code blocks comrak produced.
//!
//!     Spans in the rendered [Extraction] point into the generated HTML. [candidates] reports
//!     blocks as they sit in the markdown source, which is what diagnostics want.
//!
//! Library
//!
//!     comrak, for being a robust CommonMark + GFM implementation that is a single crate.
//!
//! [candidates]: Format::candidates

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::html::HtmlFormat;
use crate::formats::markdown::MarkdownFormat;
use comrak::{markdown_to_html, ComrakOptions};
use masteryls_parser::{Extraction, QuizCandidate, RenderContext};

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownHtmlFormat;

impl Format for MarkdownHtmlFormat {
    fn name(&self) -> &str {
        "markdown-html"
    }

    fn description(&self) -> &str {
        "Markdown source rendered to HTML with comrak, quizzes made interactive"
    }

    fn candidates(&self, source: &str) -> Result<Vec<QuizCandidate>, FormatError> {
        MarkdownFormat.candidates(source)
    }

    fn render(&self, source: &str, context: &mut RenderContext) -> Result<Extraction, FormatError> {
        let html = render_markdown(source);
        tracing::trace!(bytes = html.len(), "rendered markdown to html");
        HtmlFormat.render(&html, context)
    }
}

/// Render markdown to an HTML fragment with the options used for course content.
pub fn render_markdown(source: &str) -> String {
    markdown_to_html(source, &default_comrak_options())
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options
}
