//! Property tests for document extraction

use masteryls_parser::{replace_quiz_blocks, RenderContext};
use proptest::prelude::*;

// The alphabet cannot spell the quiz language, so no generated fence is a quiz.
const PLAIN_DOCUMENT: &str = "[a-k `~\\n\\[\\]x-]{0,256}";

proptest! {
    #[test]
    fn documents_without_quizzes_are_unchanged(source in PLAIN_DOCUMENT) {
        let extraction = replace_quiz_blocks(&source, &mut RenderContext::default());
        prop_assert_eq!(extraction.output, source);
        prop_assert!(extraction.blocks.is_empty());
    }

    #[test]
    fn text_around_a_quiz_is_preserved(
        before in "[a-k ]{0,32}\n",
        after in "\n[a-k ]{0,32}",
    ) {
        let source = format!("{before}```masteryls\n- [x] yes\n- [ ] no\n```{after}");
        let extraction = replace_quiz_blocks(&source, &mut RenderContext::default());
        prop_assert!(extraction.output.starts_with(&before));
        prop_assert!(extraction.output.ends_with(&after));
        prop_assert_eq!(extraction.rendered().count(), 1);
        prop_assert_eq!(extraction.blocks[0].span().start, before.len());
    }

    #[test]
    fn malformed_quizzes_are_kept_verbatim(body in "[a-k {}\":,\n]{0,64}") {
        let source = format!("```masteryls\n{body}\n```\n");
        let extraction = replace_quiz_blocks(&source, &mut RenderContext::default());
        prop_assert_eq!(&extraction.output, &source);
        prop_assert_eq!(extraction.preserved_count(), 1);
    }
}
