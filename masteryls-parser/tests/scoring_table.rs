//! Scoring law tests
//!
//! Each wrong selection cancels one right one, floored at zero, and the percentage is
//! taken against the number of correct options.

use masteryls_parser::{parse_quiz, score, QuizBlock, ScoreError};
use rstest::rstest;

fn single_answer() -> QuizBlock {
    parse_quiz(
        "{\"id\":\"single\",\"type\":\"multiple-choice\"}\n\
         - [ ] zero\n\
         - [ ] one\n\
         - [x] two\n\
         - [ ] three\n",
    )
    .unwrap()
}

fn multi_select() -> QuizBlock {
    parse_quiz(
        "{\"id\":\"multi\",\"type\":\"multiple-select\"}\n\
         - [ ] zero\n\
         - [x] one\n\
         - [ ] two\n\
         - [x] three\n",
    )
    .unwrap()
}

#[rstest]
#[case(&[2], 100)]
#[case(&[0], 0)]
#[case(&[2, 0], 0)]
#[case(&[0, 1, 3], 0)]
fn single_answer_scores(#[case] selected: &[usize], #[case] expected: u8) {
    let result = score(selected.iter().copied(), &single_answer()).unwrap();
    assert_eq!(result.percent_correct, expected);
    assert_eq!(result.correct_indices, vec![2]);
}

#[rstest]
#[case(&[1, 3], 100)]
#[case(&[1], 50)]
#[case(&[3], 50)]
#[case(&[1, 0], 0)]
#[case(&[1, 3, 0], 50)]
#[case(&[0, 1, 2, 3], 0)]
#[case(&[0, 2], 0)]
fn multi_select_partial_credit(#[case] selected: &[usize], #[case] expected: u8) {
    let result = score(selected.iter().copied(), &multi_select()).unwrap();
    assert_eq!(result.percent_correct, expected);
    assert_eq!(result.correct_indices, vec![1, 3]);
}

#[rstest]
#[case(&[3, 1], vec![1, 3])]
#[case(&[3, 3, 0], vec![0, 3])]
fn selections_are_reported_sorted(#[case] selected: &[usize], #[case] expected: Vec<usize>) {
    let result = score(selected.iter().copied(), &multi_select()).unwrap();
    assert_eq!(result.selected_indices, expected);
}

#[test]
fn three_correct_options_round_to_nearest() {
    let block = parse_quiz("- [x] a\n- [x] b\n- [x] c\n- [ ] d\n").unwrap();
    assert_eq!(score([0], &block).unwrap().percent_correct, 33);
    assert_eq!(score([0, 1], &block).unwrap().percent_correct, 67);
}

#[test]
fn scoring_ignores_declared_type() {
    // Declared single-answer, but two options are flagged correct.
    let block =
        parse_quiz("{\"type\":\"multiple-choice\"}\n- [x] a\n- [x] b\n- [ ] c\n").unwrap();
    assert_eq!(score([0], &block).unwrap().percent_correct, 50);
    assert_eq!(score([0, 1], &block).unwrap().percent_correct, 100);
}

#[test]
fn nothing_selected_is_not_a_zero_score() {
    assert_eq!(
        score(Vec::new(), &multi_select()),
        Err(ScoreError::NoSelection)
    );
}

#[test]
fn result_carries_quiz_identity() {
    let result = score([1], &multi_select()).unwrap();
    assert_eq!(result.id.as_deref(), Some("multi"));
    assert_eq!(
        result.declared_type.as_ref().map(|t| t.as_str()),
        Some("multiple-select")
    );
}
