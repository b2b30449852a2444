//! Quiz block descriptors and their parser
//!
//!     A quiz block's payload is two parts: an optional leading JSON object with the
//!     metadata, then any number of lines. Lines shaped like a markdown task-list item
//!     (`- [ ] text`, `- [x] text`) are the answer options, in authored order; every other
//!     line is ignored.
//!
//!     Metadata problems never fail a block. Bad JSON falls back to empty metadata and the
//!     whole payload is scanned for options. A block fails only when it has no options at
//!     all, and then the caller keeps the authored block as is.
//!
//!     See [parser](parser) for the parsing entry point and [ast](ast) for the descriptor.

mod ast;
mod error;
mod metadata;
mod parser;

pub use ast::{DeclaredType, QuizBlock, QuizKind, QuizOption};
pub use error::ParseError;
pub use parser::parse_quiz;
