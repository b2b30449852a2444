use crate::masteryls::quiz::{DeclaredType, QuizBlock};
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub id: Option<String>,
    pub declared_type: Option<DeclaredType>,
    /// Ascending.
    pub selected_indices: Vec<usize>,
    /// Ascending.
    pub correct_indices: Vec<usize>,
    pub percent_correct: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Nothing was selected. Not the same as scoring zero.
    #[error("no option selected")]
    NoSelection,
    #[error("option {index} does not exist; the quiz has {option_count} options")]
    OptionOutOfRange { index: usize, option_count: usize },
}

/// Score a selection against `block`. Duplicate indices count once.
pub fn score<I>(selected: I, block: &QuizBlock) -> Result<ScoreResult, ScoreError>
where
    I: IntoIterator<Item = usize>,
{
    let selected: BTreeSet<usize> = selected.into_iter().collect();
    if selected.is_empty() {
        return Err(ScoreError::NoSelection);
    }
    let option_count = block.options().len();
    if let Some(&index) = selected.iter().find(|&&index| index >= option_count) {
        return Err(ScoreError::OptionOutOfRange {
            index,
            option_count,
        });
    }

    let correct: BTreeSet<usize> = block.correct_indices().into_iter().collect();
    let matched = selected.intersection(&correct).count();
    let false_positives = selected.difference(&correct).count();
    let percent_correct = percent(matched.saturating_sub(false_positives), correct.len());

    Ok(ScoreResult {
        id: block.id().map(str::to_string),
        declared_type: block.declared_type().cloned(),
        selected_indices: selected.into_iter().collect(),
        correct_indices: correct.into_iter().collect(),
        percent_correct,
    })
}

/// `round(100 * net / total)`, halves rounded up; 0 when `total` is 0.
fn percent(net: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (net * 200 + total) / (2 * total);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}
