//! Quiz block parser
//!
//!     Parsing runs in three steps:
//!
//!     1. Metadata: a JSON object at the start of the payload, possibly over several lines.
//!        Any problem with it is logged and treated as empty metadata, with the whole
//!        payload left for step 2.
//!     2. Options: each line shaped `- [ ] text` / `- [x] text` / `- [X] text` becomes an
//!        option, in order. Lines that don't fit are skipped; they are never glued onto the
//!        previous option.
//!     3. The single/multiple kind is derived from how many options are correct.

use super::ast::{QuizBlock, QuizOption};
use super::error::ParseError;
use super::metadata::{split_metadata, Metadata};
use once_cell::sync::Lazy;
use regex::Regex;

static OPTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*-\s+\[([ xX])\]\s+(\S.*)$").expect("option regex is valid")
});

/// Parse the text payload of a quiz block.
pub fn parse_quiz(payload: &str) -> Result<QuizBlock, ParseError> {
    let (metadata, option_source) = match split_metadata(payload) {
        Ok((Some(map), rest)) => (Metadata::from_map(map), rest),
        Ok((None, rest)) => (Metadata::default(), rest),
        Err(err) => {
            tracing::debug!(error = %err, "ignoring quiz metadata");
            (Metadata::default(), payload)
        }
    };

    let options = parse_options(option_source);
    if options.is_empty() {
        return Err(ParseError::NoOptionsFound);
    }

    tracing::trace!(
        id = metadata.id.as_deref().unwrap_or(""),
        options = options.len(),
        "parsed quiz block"
    );

    Ok(QuizBlock::from_parts(
        metadata.id,
        metadata.title,
        metadata.declared_type,
        metadata.body,
        metadata.extra,
        options,
    ))
}

fn parse_options(source: &str) -> Vec<QuizOption> {
    source
        .lines()
        .filter_map(|line| OPTION_LINE.captures(line))
        .map(|caps| {
            let correct = matches!(&caps[1], "x" | "X");
            QuizOption::new(caps[2].trim_end(), correct)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masteryls::quiz::{DeclaredType, QuizKind};

    #[test]
    fn parses_full_block() {
        let block = parse_quiz(
            "{\"id\":\"q1\", \"title\":\"Capitals\", \"type\":\"multiple-choice\"}\n\
             - [ ] Lyon\n\
             - [x] Paris\n\
             - [ ] Nice\n",
        )
        .unwrap();

        assert_eq!(block.id(), Some("q1"));
        assert_eq!(block.title(), "Capitals");
        assert_eq!(block.declared_type(), Some(&DeclaredType::MultipleChoice));
        assert_eq!(block.kind(), QuizKind::Single);
        assert_eq!(
            block.options(),
            &[
                QuizOption::new("Lyon", false),
                QuizOption::new("Paris", true),
                QuizOption::new("Nice", false),
            ]
        );
    }

    #[test]
    fn options_without_metadata_get_default_title() {
        let block = parse_quiz("- [x] yes\n- [ ] no\n").unwrap();
        assert_eq!(block.id(), None);
        assert_eq!(block.title(), "Quiz");
        assert_eq!(block.declared_type(), None);
        assert_eq!(block.options().len(), 2);
    }

    #[test]
    fn uppercase_x_marks_correct() {
        let block = parse_quiz("- [X] a\n- [x] b\n- [ ] c").unwrap();
        assert_eq!(block.correct_indices(), vec![0, 1]);
        assert_eq!(block.kind(), QuizKind::Multiple);
    }

    #[test]
    fn indented_and_spaced_options_match() {
        let block = parse_quiz("   -   [x]    spaced out   \n\t- [ ] tabbed\n").unwrap();
        assert_eq!(block.options()[0], QuizOption::new("spaced out", true));
        assert_eq!(block.options()[1], QuizOption::new("tabbed", false));
    }

    #[test]
    fn other_lines_are_ignored_not_concatenated() {
        let block = parse_quiz(
            "Intro line\n\
             - [x] first\n\
             continued text\n\
             * [x] star bullet\n\
             - [y] odd box\n\
             -[x] no space\n\
             - [ ] second\n",
        )
        .unwrap();
        assert_eq!(
            block.options(),
            &[
                QuizOption::new("first", true),
                QuizOption::new("second", false)
            ]
        );
    }

    #[test]
    fn empty_option_text_is_not_an_option() {
        let result = parse_quiz("- [x]   \n- [ ]\n");
        assert_eq!(result, Err(ParseError::NoOptionsFound));
    }

    #[test]
    fn bad_metadata_falls_back_to_defaults() {
        let block = parse_quiz("{\"id\": oops}\n- [ ] a\n- [x] b\n").unwrap();
        assert_eq!(block.id(), None);
        assert_eq!(block.title(), "Quiz");
        assert_eq!(block.correct_indices(), vec![1]);
    }

    #[test]
    fn unterminated_metadata_falls_back_to_defaults() {
        let block = parse_quiz("{\"title\": \"T\"\n- [x] a\n").unwrap();
        assert_eq!(block.title(), "Quiz");
        assert_eq!(block.options().len(), 1);
    }

    #[test]
    fn no_options_is_an_error() {
        assert_eq!(
            parse_quiz("{\"id\":\"essay-1\", \"type\":\"essay\"}\nWrite about it."),
            Err(ParseError::NoOptionsFound)
        );
        assert_eq!(parse_quiz(""), Err(ParseError::NoOptionsFound));
    }

    #[test]
    fn option_text_keeps_markup_and_brackets() {
        let block = parse_quiz("- [x] **bold** <b>tag</b> [link](http://x)\n").unwrap();
        assert_eq!(
            block.options()[0].text,
            "**bold** <b>tag</b> [link](http://x)"
        );
    }

    #[test]
    fn crlf_lines_are_handled() {
        let block = parse_quiz("{\"id\":\"w\"}\r\n- [ ] a\r\n- [x] b\r\n").unwrap();
        assert_eq!(block.id(), Some("w"));
        assert_eq!(block.options()[1], QuizOption::new("b", true));
    }

    #[test]
    fn divergent_declared_type_is_tolerated() {
        let block =
            parse_quiz("{\"type\":\"multiple-choice\"}\n- [x] a\n- [x] b\n- [ ] c\n").unwrap();
        assert_eq!(block.declared_type(), Some(&DeclaredType::MultipleChoice));
        assert_eq!(block.kind(), QuizKind::Multiple);
    }
}
