//! Inline micro markup for option labels
//!
//!     Option labels (and the quiz title and body) accept four inline constructs and
//!     nothing else: image `![alt](url)`, link `[text](url)`, bold `**text**` and
//!     emphasis `_text_` / `*text*`. At each position the scanner tries them in that
//!     order; the first match wins and the scan resumes after it.
//!
//!     Parsing and emission are separate: [parse_inlines] builds an [InlineNode] tree,
//!     [to_html] writes it out with every literal escaped. Link, bold and emphasis text
//!     is scanned again for nested constructs, down to [InlineOptions::max_depth] levels.
//!     Anything that doesn't close, or whose URL the [UrlPolicy] refuses, stays literal
//!     text. There is no error path.

mod html;
mod nodes;
mod parser;

pub use html::{escape, render_inline, render_inline_with, to_html, SafeMarkup};
pub use nodes::{InlineContent, InlineNode};
pub use parser::{parse_inlines, parse_inlines_with, InlineOptions, UrlPolicy};
