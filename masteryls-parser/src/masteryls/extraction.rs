//! Quiz block extraction
//!
//!     Finds quiz blocks in a document and splices the rendered quiz in place of each.
//!     Bytes outside the replaced spans are copied unchanged, so a document without quiz
//!     blocks comes back identical.
//!
//!     Sources are located by [fences] for raw markdown; `masteryls-babel` locates them
//!     in rendered HTML. Either way the located blocks go through [render_candidates],
//!     which parses each payload, renders the ones that parse and leaves the rest as
//!     authored. A broken block never stops its siblings from rendering.

mod fences;
mod splice;

pub use fences::{fenced_blocks, FencedBlock};
pub use splice::{render_candidates, replace_quiz_blocks, BlockOutcome, Extraction, QuizCandidate};
