use super::fences::fenced_blocks;
use crate::masteryls::quiz::{parse_quiz, ParseError, QuizBlock};
use crate::masteryls::rendering::{render_quiz, RenderContext};
use crate::masteryls::QUIZ_LANGUAGE;
use serde::Serialize;
use std::ops::Range;

/// A located quiz block: where it sits in the source and its decoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizCandidate {
    pub span: Range<usize>,
    pub payload: String,
}

/// What happened to one quiz block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BlockOutcome {
    /// Replaced by rendered markup under group key `key`.
    Rendered {
        span: Range<usize>,
        key: String,
        quiz: QuizBlock,
    },
    /// Left as authored.
    Preserved {
        span: Range<usize>,
        #[serde(serialize_with = "error_message")]
        error: ParseError,
    },
}

impl BlockOutcome {
    /// Span of the block in the source document.
    pub fn span(&self) -> &Range<usize> {
        match self {
            BlockOutcome::Rendered { span, .. } | BlockOutcome::Preserved { span, .. } => span,
        }
    }

    pub fn quiz(&self) -> Option<&QuizBlock> {
        match self {
            BlockOutcome::Rendered { quiz, .. } => Some(quiz),
            BlockOutcome::Preserved { .. } => None,
        }
    }
}

fn error_message<S: serde::Serializer>(error: &ParseError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Result of one extraction pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    pub output: String,
    pub blocks: Vec<BlockOutcome>,
}

impl Extraction {
    pub fn rendered(&self) -> impl Iterator<Item = (&str, &QuizBlock)> {
        self.blocks.iter().filter_map(|outcome| match outcome {
            BlockOutcome::Rendered { key, quiz, .. } => Some((key.as_str(), quiz)),
            BlockOutcome::Preserved { .. } => None,
        })
    }

    pub fn preserved_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|outcome| matches!(outcome, BlockOutcome::Preserved { .. }))
            .count()
    }
}

/// Replace every `masteryls` fenced block of a markdown document with its rendered quiz.
pub fn replace_quiz_blocks(document: &str, context: &mut RenderContext) -> Extraction {
    let candidates = fenced_blocks(document)
        .into_iter()
        .filter(|block| block.language() == Some(QUIZ_LANGUAGE))
        .map(|block| QuizCandidate {
            span: block.span,
            payload: block.content,
        });
    render_candidates(document, candidates, context)
}

/// Parse and render located candidates, splicing the results into `document`.
///
/// Candidates must come in document order and must not overlap. Candidates whose
/// payload does not parse keep their original bytes.
pub fn render_candidates<I>(document: &str, candidates: I, context: &mut RenderContext) -> Extraction
where
    I: IntoIterator<Item = QuizCandidate>,
{
    let mut output = String::with_capacity(document.len());
    let mut blocks = Vec::new();
    let mut cursor = 0;

    for QuizCandidate { span, payload } in candidates {
        match parse_quiz(&payload) {
            Ok(quiz) => {
                let rendered = render_quiz(&quiz, context);
                output.push_str(&document[cursor..span.start]);
                output.push_str(rendered.markup.as_str());
                cursor = span.end;
                tracing::trace!(key = %rendered.key, start = span.start, "rendered quiz block");
                blocks.push(BlockOutcome::Rendered {
                    span,
                    key: rendered.key,
                    quiz,
                });
            }
            Err(error) => {
                tracing::warn!(
                    start = span.start,
                    end = span.end,
                    %error,
                    "keeping quiz block as authored"
                );
                blocks.push(BlockOutcome::Preserved { span, error });
            }
        }
    }
    output.push_str(&document[cursor..]);

    Extraction { output, blocks }
}
