//! Quiz rendering
//!
//!     Turns a [QuizBlock](crate::masteryls::quiz::QuizBlock) into interactive HTML. The
//!     markup carries everything a host needs to wire behavior after mounting it:
//!
//!     - root `div.masteryls-quiz` with id `masteryls-quiz-<key>` and `data-quiz-*`
//!       attributes for the key, id, title, declared type and derived kind
//!     - one `<input>` per option, all sharing the group name `masteryls-<key>`, with
//!       `value` and `data-option-index` set to the option position and `data-correct`
//!       set to its flag
//!     - submit/reset buttons identified by `data-action`, with no inline script
//!     - an empty `aria-live` region for the result
//!
//!     `data-correct` makes the answers readable by anyone who opens the page source.
//!     Scoring happens in the client without a server round-trip, so this exposure is
//!     accepted.
//!
//!     Keys come from the authored id, or from the [RenderContext] of the current render
//!     pass when the author gave none. The context is per pass; two passes never share
//!     a counter.

mod context;
mod markup;

pub use context::{RenderContext, RenderOptions};
pub use markup::{render_quiz, InputStyle, InteractiveMarkup};
