//! Format trait definition
//!
//! This module defines the core Format trait that all source formats implement.

use crate::error::FormatError;
use masteryls_parser::{render_candidates, Extraction, QuizCandidate, RenderContext};

/// Trait for quiz source formats
///
/// A format knows where quiz blocks live in its kind of document. Rendering splices the
/// markup of every block that parses into the document and leaves the rest untouched.
///
/// # Examples
///
/// ```ignore
/// struct PlainFormat;
///
/// impl Format for PlainFormat {
///     fn name(&self) -> &str {
///         "plain"
///     }
///
///     fn candidates(&self, source: &str) -> Result<Vec<QuizCandidate>, FormatError> {
///         Ok(vec![QuizCandidate { span: 0..source.len(), payload: source.to_string() }])
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions this format claims, lowercase and without the dot
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Locate the quiz blocks of `source`, in document order, with spans into `source`.
    fn candidates(&self, source: &str) -> Result<Vec<QuizCandidate>, FormatError>;

    /// Replace every quiz block of `source` with its rendered markup.
    ///
    /// The default splices the rendered candidates into `source`. Formats that
    /// transform the whole document override this.
    fn render(&self, source: &str, context: &mut RenderContext) -> Result<Extraction, FormatError> {
        let candidates = self.candidates(source)?;
        Ok(render_candidates(source, candidates, context))
    }
}
