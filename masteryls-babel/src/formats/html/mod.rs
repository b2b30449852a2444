//! HTML format implementation
//!
//!     Quiz blocks are `<pre><code>` elements where either element carries the class token
//!     `language-masteryls`, which is what comrak, pulldown-cmark and most static site
//!     generators emit for a fenced block tagged `masteryls`.
//!
//!     A regex cuts out candidate `<pre>…<code>…</code>…</pre>` spans so the rest of the
//!     document keeps its exact bytes. Each span is then parsed with html5ever, and the quiz
//!     text is the concatenation of the decoded text nodes inside `code`. That way character
//!     references (`&quot;`, `&lt;`) are decoded and markup added by syntax highlighters
//!     (`<span class="tok">`) never reaches the quiz parser.

mod extractor;

pub use extractor::{quiz_candidates, QUIZ_CLASS};

use crate::error::FormatError;
use crate::format::Format;
use masteryls_parser::QuizCandidate;

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML source; quiz <pre><code> blocks are replaced by markup in place"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn candidates(&self, source: &str) -> Result<Vec<QuizCandidate>, FormatError> {
        Ok(quiz_candidates(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_format_name() {
        let format = HtmlFormat;
        assert_eq!(format.name(), "html");
        assert_eq!(format.file_extensions(), &["html", "htm"]);
    }
}
