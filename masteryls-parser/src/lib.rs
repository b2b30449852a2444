//! # masteryls-parser
//!
//! Parser, renderer and scorer for masteryls quiz blocks.
//!
//! Course content is plain markdown. A quiz is a fenced code block tagged `masteryls`
//! holding optional JSON metadata followed by a checkbox list:
//!
//!     ```masteryls
//!     {"id":"q1", "title":"Pick one", "type":"multiple-choice"}
//!     - [ ] wrong
//!     - [x] right
//!     ```
//!
//! File Layout
//!
//!     src/masteryls
//!       ├── extraction   Locating quiz fences in markdown and replacing them
//!       ├── quiz         The QuizBlock descriptor and its parser
//!       ├── inlines      The option-label micro markup (image, link, bold, emphasis)
//!       ├── rendering    QuizBlock -> interactive HTML markup, render-pass context
//!       └── scoring      Partial-credit scoring and the host-side attempt state
//!
//!     Data flows one way: document -> block text -> QuizBlock -> markup -> ScoreResult.
//!     Every step is a pure function of its input; the only per-pass state is the
//!     [RenderContext](masteryls::rendering::RenderContext) handed to the renderer.
//!
//! HTML sources and the markdown -> HTML pipeline live in `masteryls-babel`.

pub mod masteryls;

pub use masteryls::extraction::{
    render_candidates, replace_quiz_blocks, BlockOutcome, Extraction, QuizCandidate,
};
pub use masteryls::inlines::{
    render_inline, render_inline_with, InlineOptions, SafeMarkup, UrlPolicy,
};
pub use masteryls::quiz::{parse_quiz, DeclaredType, ParseError, QuizBlock, QuizKind, QuizOption};
pub use masteryls::rendering::{
    render_quiz, InputStyle, InteractiveMarkup, RenderContext, RenderOptions,
};
pub use masteryls::QUIZ_LANGUAGE;
pub use masteryls::scoring::{score, QuizAttempt, ScoreError, ScoreResult, SubmissionSink};
