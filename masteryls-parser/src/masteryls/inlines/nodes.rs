//! Inline AST nodes produced by the label scanner.

/// Sequence of inline nodes.
pub type InlineContent = Vec<InlineNode>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text segment, unescaped.
    Plain(String),
    /// `**text**`
    Strong(InlineContent),
    /// `_text_` or `*text*`
    Emphasis(InlineContent),
    /// `[text](href)`
    Link { href: String, children: InlineContent },
    /// `![alt](src)`; alt text is never scanned for markup.
    Image { src: String, alt: String },
}

