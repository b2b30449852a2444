//! Source formats for masteryls quiz rendering
//!
//!     The parser crate knows how to find quiz fences in raw markdown. Course sites do not
//!     always hand us raw markdown, though: some pipelines render markdown to HTML first and
//!     only then want the quizzes made interactive. This crate gives every kind of source the
//!     same interface.
//!
//! Architecture
//!
//!     - Format trait: locate quiz blocks in a source and render them in place
//!     - FormatRegistry: lookup by name, or a guess from a file extension
//!     - Format implementations:
//!         - markdown: raw fenced blocks, delegated to the parser crate
//!         - html: `<pre><code class="language-masteryls">` spans, decoded with html5ever
//!         - markdown-html: comrak renders the document, then the html format takes over
//!
//!     This is a pure lib: no printing, no env vars, no file access. The cli crate does that.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── <format>
//!     │   │   └── mod.rs
//!     ├── lib.rs
//!
//! Implementation Principles
//!
//!     We never write our own markdown or HTML parser. Markdown rendering goes to comrak, HTML
//!     decoding goes to html5ever. The only thing done by hand is cutting quiz spans out of a
//!     document and splicing rendered markup back in, since both libraries would otherwise
//!     re-serialize (and so reformat) the parts of the document we must leave untouched.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
