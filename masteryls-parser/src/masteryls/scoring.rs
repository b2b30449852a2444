//! Scoring
//!
//!     Multi-select quizzes get partial credit. Each wrong selection cancels one right
//!     one, and the net count is floored at zero:
//!
//!         net     = max(0, |selected ∩ correct| - |selected \ correct|)
//!         percent = 0 when no option is correct, else round(100 * net / |correct|)
//!
//!     Single-answer quizzes are the same law with one correct option, so they score 0
//!     or 100. The declared type never enters the computation.
//!
//!     [score] is a pure function. [QuizAttempt] is the host-side state of one rendered
//!     quiz: the current selection, submitted as a single event to a [SubmissionSink].

mod attempt;
mod score;

pub use attempt::{QuizAttempt, SubmissionSink};
pub use score::{score, ScoreError, ScoreResult};
