//! Quiz descriptor types
//!
//! A [QuizBlock] is built fresh on every render pass and thrown away once the markup is
//! emitted. Option order is the authored order and doubles as the option identity: the
//! renderer's `data-option-index` and the scorer's indices are positions in
//! [QuizBlock::options].

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Single or multiple answer, derived from the correctness flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizKind {
    Single,
    Multiple,
}

impl QuizKind {
    /// `Multiple` iff more than one option is marked correct.
    pub fn from_options(options: &[QuizOption]) -> Self {
        if options.iter().filter(|option| option.correct).count() > 1 {
            QuizKind::Multiple
        } else {
            QuizKind::Single
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuizKind::Single => "single",
            QuizKind::Multiple => "multiple",
        }
    }
}

/// The authored `type` metadata value.
///
/// Only used to pick the input control style. It may disagree with [QuizKind]
/// (an author can tag a quiz `multiple-choice` and mark two options correct); such
/// content keeps working, rendering radios while scoring follows the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    MultipleChoice,
    SingleChoice,
    MultipleSelect,
    Essay,
    FileSubmission,
    UrlSubmission,
    Other(String),
}

impl DeclaredType {
    pub fn from_authored(value: &str) -> Self {
        match value {
            "multiple-choice" => DeclaredType::MultipleChoice,
            "single-choice" => DeclaredType::SingleChoice,
            "multiple-select" => DeclaredType::MultipleSelect,
            "essay" => DeclaredType::Essay,
            "file-submission" => DeclaredType::FileSubmission,
            "url-submission" => DeclaredType::UrlSubmission,
            other => DeclaredType::Other(other.to_string()),
        }
    }

    /// The authored spelling.
    pub fn as_str(&self) -> &str {
        match self {
            DeclaredType::MultipleChoice => "multiple-choice",
            DeclaredType::SingleChoice => "single-choice",
            DeclaredType::MultipleSelect => "multiple-select",
            DeclaredType::Essay => "essay",
            DeclaredType::FileSubmission => "file-submission",
            DeclaredType::UrlSubmission => "url-submission",
            DeclaredType::Other(value) => value,
        }
    }

    /// Whether the type names a one-answer choice quiz, rendered with radio inputs.
    pub fn is_single_answer(&self) -> bool {
        matches!(
            self,
            DeclaredType::MultipleChoice | DeclaredType::SingleChoice
        )
    }
}

impl Serialize for DeclaredType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    /// Raw label text, still holding inline markup.
    pub text: String,
    pub correct: bool,
}

impl QuizOption {
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }
}

/// A parsed quiz block.
///
/// Fields are read-only once built: the renderer and scorer never alter the
/// correctness flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizBlock {
    id: Option<String>,
    title: String,
    kind: QuizKind,
    #[serde(rename = "type")]
    declared_type: Option<DeclaredType>,
    body: Option<String>,
    options: Vec<QuizOption>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    extra: Map<String, Value>,
}

impl QuizBlock {
    pub const DEFAULT_TITLE: &'static str = "Quiz";

    pub(crate) fn from_parts(
        id: Option<String>,
        title: Option<String>,
        declared_type: Option<DeclaredType>,
        body: Option<String>,
        extra: Map<String, Value>,
        options: Vec<QuizOption>,
    ) -> Self {
        Self {
            id,
            title: title.unwrap_or_else(|| Self::DEFAULT_TITLE.to_string()),
            kind: QuizKind::from_options(&options),
            declared_type,
            body,
            options,
            extra,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> QuizKind {
        self.kind
    }

    pub fn declared_type(&self) -> Option<&DeclaredType> {
        self.declared_type.as_ref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn options(&self) -> &[QuizOption] {
        &self.options
    }

    /// Metadata keys other than `id`, `title`, `type` and `body`.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Positions of the correct options, ascending.
    pub fn correct_indices(&self) -> Vec<usize> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.correct)
            .map(|(index, _)| index)
            .collect()
    }
}
