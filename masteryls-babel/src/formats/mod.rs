//! Format implementations
//!
//! Each format locates quiz blocks in one kind of source document.

pub mod html;
pub mod markdown;
pub mod markdown_html;

pub use html::HtmlFormat;
pub use markdown::MarkdownFormat;
pub use markdown_html::MarkdownHtmlFormat;
