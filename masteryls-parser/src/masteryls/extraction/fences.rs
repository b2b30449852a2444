//! Fenced code block scanner for raw markdown
//!
//!     Follows the CommonMark fence rules that matter for locating blocks:
//!
//!     - an opening fence is three or more backticks or tildes, indented by at most three
//!       spaces, followed by an info string (which may not contain a backtick when the
//!       fence is made of backticks)
//!     - the closing fence uses the same character, is at least as long as the opening
//!       one, is indented by at most three spaces and has nothing after it but whitespace
//!     - a fence that never closes runs to the end of the document
//!     - content lines lose up to as many leading spaces as the opening fence had
//!
//!     Every fenced block is reported, whatever its language, so a quiz fence written
//!     inside another fence (say, a tutorial showing the syntax) stays content of the
//!     outer block.

use std::ops::Range;

/// A fenced code block located in a markdown source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock<'s> {
    /// Byte span from the start of the opening fence line to the end of the closing
    /// fence, line terminator excluded.
    pub span: Range<usize>,
    /// Info string after the opening fence, trimmed.
    pub info: &'s str,
    /// Content lines, indentation removed, terminators kept.
    pub content: String,
}

impl FencedBlock<'_> {
    /// First word of the info string.
    pub fn language(&self) -> Option<&str> {
        self.info.split_whitespace().next()
    }
}

#[derive(Debug, Clone, Copy)]
struct Fence {
    marker: char,
    length: usize,
    indent: usize,
}

impl Fence {
    /// Parse an opening fence; returns it and its info string.
    fn open(line: &str) -> Option<(Fence, &str)> {
        let (indent, rest) = split_indent(line)?;
        let marker = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
        let length = rest.chars().take_while(|c| *c == marker).count();
        if length < 3 {
            return None;
        }
        let info = rest[length..].trim();
        if marker == '`' && info.contains('`') {
            return None;
        }
        Some((
            Fence {
                marker,
                length,
                indent,
            },
            info,
        ))
    }

    fn closes(&self, line: &str) -> bool {
        let Some((_, rest)) = split_indent(line) else {
            return false;
        };
        let length = rest.chars().take_while(|c| *c == self.marker).count();
        length >= self.length && rest[length..].trim().is_empty()
    }

    fn strip_indent<'l>(&self, line: &'l str) -> &'l str {
        let spaces = line
            .bytes()
            .take(self.indent)
            .take_while(|b| *b == b' ')
            .count();
        &line[spaces..]
    }
}

/// Leading spaces (at most three) and the rest of the line without its terminator.
fn split_indent(line: &str) -> Option<(usize, &str)> {
    let body = strip_terminator(line);
    let indent = body.len() - body.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    Some((indent, &body[indent..]))
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// All fenced code blocks of `source`, in document order.
pub fn fenced_blocks(source: &str) -> Vec<FencedBlock<'_>> {
    let mut blocks = Vec::new();
    let mut open: Option<(Fence, &str, usize)> = None;
    let mut content = String::new();
    let mut offset = 0;

    for line in source.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        match open {
            None => {
                if let Some((fence, info)) = Fence::open(line) {
                    open = Some((fence, info, line_start));
                    content.clear();
                }
            }
            Some((fence, info, start)) => {
                if fence.closes(line) {
                    blocks.push(FencedBlock {
                        span: start..line_start + strip_terminator(line).len(),
                        info,
                        content: std::mem::take(&mut content),
                    });
                    open = None;
                } else {
                    content.push_str(fence.strip_indent(line));
                }
            }
        }
    }

    if let Some((_, info, start)) = open {
        let end = strip_terminator(source).len().max(start);
        blocks.push(FencedBlock {
            span: start..end,
            info,
            content,
        });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_backtick_block() {
        let source = "intro\n```masteryls\n- [x] a\n```\noutro\n";
        let blocks = fenced_blocks(source);
        assert_eq!(blocks.len(), 1);
        let block = &blocks[0];
        assert_eq!(block.language(), Some("masteryls"));
        assert_eq!(block.content, "- [x] a\n");
        assert_eq!(&source[block.span.clone()], "```masteryls\n- [x] a\n```");
    }

    #[test]
    fn finds_tilde_block_with_extra_info() {
        let source = "~~~~ masteryls  title=x\nbody\n~~~~~\n";
        let blocks = fenced_blocks(source);
        assert_eq!(blocks[0].info, "masteryls  title=x");
        assert_eq!(blocks[0].language(), Some("masteryls"));
        assert_eq!(blocks[0].span, 0..source.len() - 1);
    }

    #[test]
    fn shorter_or_different_closer_does_not_close() {
        let source = "````js\n```\n~~~~\n````\n";
        let blocks = fenced_blocks(source);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "```\n~~~~\n");
    }

    #[test]
    fn closer_with_trailing_text_does_not_close() {
        let source = "```\na\n``` nope\n```\n";
        let blocks = fenced_blocks(source);
        assert_eq!(blocks[0].content, "a\n``` nope\n");
    }

    #[test]
    fn nested_quiz_fence_stays_content() {
        let source = "````markdown\n```masteryls\n- [x] a\n```\n````\n";
        let blocks = fenced_blocks(source);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language(), Some("markdown"));
    }

    #[test]
    fn indentation_is_removed_from_content() {
        let source = "  ```masteryls\n  - [x] a\n    - [ ] b\n - [ ] c\n  ```\n";
        let blocks = fenced_blocks(source);
        assert_eq!(blocks[0].content, "- [x] a\n  - [ ] b\n- [ ] c\n");
    }

    #[test]
    fn four_spaces_is_not_a_fence() {
        assert!(fenced_blocks("    ```masteryls\n    - [x] a\n    ```\n").is_empty());
    }

    #[test]
    fn backtick_in_info_is_not_a_fence() {
        assert!(fenced_blocks("``` a`b\nx\n```\n").is_empty());
    }

    #[test]
    fn unclosed_fence_runs_to_end() {
        let source = "text\n```masteryls\n- [x] a\n";
        let blocks = fenced_blocks(source);
        assert_eq!(blocks[0].span, 5..source.len() - 1);
        assert_eq!(blocks[0].content, "- [x] a\n");
    }

    #[test]
    fn crlf_terminators() {
        let source = "```masteryls\r\n- [x] a\r\n```\r\nafter";
        let blocks = fenced_blocks(source);
        assert_eq!(&source[blocks[0].span.clone()], "```masteryls\r\n- [x] a\r\n```");
        assert_eq!(blocks[0].content, "- [x] a\r\n");
    }

    #[test]
    fn language_is_case_sensitive_word() {
        let blocks = fenced_blocks("```MasteryLS\nx\n```\n```masteryls-extra\ny\n```\n");
        assert_eq!(blocks[0].language(), Some("MasteryLS"));
        assert_eq!(blocks[1].language(), Some("masteryls-extra"));
    }
}
