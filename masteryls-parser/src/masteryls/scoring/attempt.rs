use super::score::{score, ScoreError, ScoreResult};
use crate::masteryls::quiz::QuizBlock;
use crate::masteryls::rendering::InputStyle;
use std::collections::BTreeSet;

/// Receives each scored submission.
pub trait SubmissionSink {
    fn submitted(&mut self, result: &ScoreResult);
}

impl<F> SubmissionSink for F
where
    F: FnMut(&ScoreResult),
{
    fn submitted(&mut self, result: &ScoreResult) {
        (*self)(result)
    }
}

/// Selection state of one rendered quiz, as a host tracks it between mount and
/// submission.
///
/// Radio-style quizzes keep at most one selected option; checkbox quizzes any number.
/// Submitting scores the current selection from scratch every time.
#[derive(Debug, Clone)]
pub struct QuizAttempt<'b> {
    block: &'b QuizBlock,
    style: InputStyle,
    selected: BTreeSet<usize>,
    submissions: usize,
    last_result: Option<ScoreResult>,
}

impl<'b> QuizAttempt<'b> {
    pub fn new(block: &'b QuizBlock) -> Self {
        Self {
            block,
            style: InputStyle::for_block(block),
            selected: BTreeSet::new(),
            submissions: 0,
            last_result: None,
        }
    }

    pub fn block(&self) -> &QuizBlock {
        self.block
    }

    pub fn input_style(&self) -> InputStyle {
        self.style
    }

    /// Current selection, ascending.
    pub fn selected(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Check option `index`. For radio quizzes this replaces the previous choice.
    pub fn select(&mut self, index: usize) -> Result<(), ScoreError> {
        self.check_index(index)?;
        if self.style == InputStyle::Radio {
            self.selected.clear();
        }
        self.selected.insert(index);
        Ok(())
    }

    pub fn deselect(&mut self, index: usize) -> Result<(), ScoreError> {
        self.check_index(index)?;
        self.selected.remove(&index);
        Ok(())
    }

    /// Flip option `index`, as a click on its control would.
    pub fn toggle(&mut self, index: usize) -> Result<(), ScoreError> {
        if self.is_selected(index) {
            self.deselect(index)
        } else {
            self.select(index)
        }
    }

    /// Back to the pre-submission state.
    pub fn reset(&mut self) {
        self.selected.clear();
        self.last_result = None;
    }

    /// Score the current selection and report it to `sink`.
    ///
    /// An empty selection fails with [ScoreError::NoSelection] and reports nothing.
    pub fn submit<S>(&mut self, sink: &mut S) -> Result<ScoreResult, ScoreError>
    where
        S: SubmissionSink + ?Sized,
    {
        let result = score(self.selected.iter().copied(), self.block)?;
        self.submissions += 1;
        tracing::debug!(
            id = self.block.id().unwrap_or(""),
            percent = result.percent_correct,
            "quiz submitted"
        );
        sink.submitted(&result);
        self.last_result = Some(result.clone());
        Ok(result)
    }

    /// Successful submissions so far. Survives [reset](Self::reset).
    pub fn submissions(&self) -> usize {
        self.submissions
    }

    pub fn last_result(&self) -> Option<&ScoreResult> {
        self.last_result.as_ref()
    }

    fn check_index(&self, index: usize) -> Result<(), ScoreError> {
        let option_count = self.block.options().len();
        if index < option_count {
            Ok(())
        } else {
            Err(ScoreError::OptionOutOfRange {
                index,
                option_count,
            })
        }
    }
}
