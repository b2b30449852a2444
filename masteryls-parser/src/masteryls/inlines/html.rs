//! HTML emission for inline nodes

use super::nodes::{InlineContent, InlineNode};
use super::parser::{parse_inlines_with, InlineOptions};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// HTML that is safe to splice into a document: every authored character has been
/// escaped or placed inside an attribute value that was escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafeMarkup(String);

impl SafeMarkup {
    /// Wrap markup assembled inside this crate from escaped pieces.
    pub(crate) fn trusted(markup: String) -> Self {
        SafeMarkup(markup)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape `&`, `<`, `>` and `"`. Used for text and double-quoted attribute values alike.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

/// Render a label with the default [InlineOptions].
pub fn render_inline(text: &str) -> SafeMarkup {
    render_inline_with(text, &InlineOptions::default())
}

pub fn render_inline_with(text: &str, options: &InlineOptions) -> SafeMarkup {
    to_html(&parse_inlines_with(text, options))
}

/// Write inline nodes as HTML.
pub fn to_html(nodes: &InlineContent) -> SafeMarkup {
    let mut out = String::new();
    write_nodes(&mut out, nodes);
    SafeMarkup(out)
}

fn write_nodes(out: &mut String, nodes: &InlineContent) {
    for node in nodes {
        write_node(out, node);
    }
}

fn write_node(out: &mut String, node: &InlineNode) {
    match node {
        InlineNode::Plain(text) => out.push_str(&escape(text)),
        InlineNode::Strong(children) => {
            out.push_str("<strong>");
            write_nodes(out, children);
            out.push_str("</strong>");
        }
        InlineNode::Emphasis(children) => {
            out.push_str("<em>");
            write_nodes(out, children);
            out.push_str("</em>");
        }
        InlineNode::Link { href, children } => {
            out.push_str("<a href=\"");
            out.push_str(&escape(href));
            out.push_str("\">");
            write_nodes(out, children);
            out.push_str("</a>");
        }
        InlineNode::Image { src, alt } => {
            out.push_str("<img src=\"");
            out.push_str(&escape(src));
            out.push_str("\" alt=\"");
            out.push_str(&escape(alt));
            out.push_str("\">");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_escaped() {
        assert_eq!(
            render_inline("a < b & \"c\" > d").as_str(),
            "a &lt; b &amp; &quot;c&quot; &gt; d"
        );
    }

    #[test]
    fn text_without_constructs_keeps_its_shape() {
        assert_eq!(render_inline("just words").as_str(), "just words");
    }

    #[test]
    fn raw_tags_never_survive() {
        let html = render_inline("<script>alert(1)</script>");
        assert!(!html.as_str().contains('<'));
    }

    #[test]
    fn bold_wraps_link() {
        assert_eq!(
            render_inline("**[link](http://x)**").as_str(),
            "<strong><a href=\"http://x\">link</a></strong>"
        );
    }

    #[test]
    fn triple_stars_render_balanced_tags() {
        assert_eq!(
            render_inline("***a***").as_str(),
            "<strong><em>a</em></strong>"
        );
    }

    #[test]
    fn image_attributes_are_escaped() {
        assert_eq!(
            render_inline("![say \"hi\"](pic.png?a=1&b=2)").as_str(),
            "<img src=\"pic.png?a=1&amp;b=2\" alt=\"say &quot;hi&quot;\">"
        );
    }

    #[test]
    fn emphasis_variants() {
        assert_eq!(
            render_inline("_one_ and *two*").as_str(),
            "<em>one</em> and <em>two</em>"
        );
    }

    #[test]
    fn refused_link_is_escaped_literal() {
        assert_eq!(
            render_inline("[x](javascript:void)").as_str(),
            "[x](javascript:void)"
        );
    }
}
