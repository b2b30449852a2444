use super::nodes::{InlineContent, InlineNode};
use serde::{Deserialize, Serialize};

/// Which link and image targets are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrlPolicy {
    /// `http://`, `https://` and scheme-less relative URLs only.
    #[default]
    Safe,
    /// Any URL, inserted as authored.
    Verbatim,
}

impl UrlPolicy {
    pub fn allows(self, url: &str) -> bool {
        match self {
            UrlPolicy::Verbatim => true,
            UrlPolicy::Safe => match scheme_of(url) {
                None => true,
                Some(scheme) => {
                    scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
                }
            },
        }
    }
}

/// The scheme of `url`, if it has one (`scheme ":"` before any `/`, `?` or `#`).
fn scheme_of(url: &str) -> Option<&str> {
    let colon = url.find(':')?;
    let candidate = &url[..colon];
    let mut chars = candidate.chars();
    let first = chars.next()?;
    let is_scheme = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    is_scheme.then_some(candidate)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineOptions {
    /// Nesting levels scanned inside link, bold and emphasis text. Deeper text is literal.
    pub max_depth: usize,
    pub url_policy: UrlPolicy,
}

impl Default for InlineOptions {
    fn default() -> Self {
        Self {
            max_depth: 8,
            url_policy: UrlPolicy::Safe,
        }
    }
}

/// Parse inline nodes from a raw label with the default options.
pub fn parse_inlines(text: &str) -> InlineContent {
    parse_inlines_with(text, &InlineOptions::default())
}

pub fn parse_inlines_with(text: &str, options: &InlineOptions) -> InlineContent {
    Scanner { options }.scan(text, 0)
}

struct Scanner<'o> {
    options: &'o InlineOptions,
}

impl Scanner<'_> {
    fn scan(&self, text: &str, depth: usize) -> InlineContent {
        let mut out = ContentBuilder::default();
        if depth > self.options.max_depth {
            out.push_str(text);
            return out.finish();
        }

        let mut pos = 0;
        while pos < text.len() {
            if let Some((node, consumed)) = self.match_at(text, pos, depth) {
                out.push_node(node);
                pos += consumed;
                continue;
            }
            let Some(ch) = text[pos..].chars().next() else {
                break;
            };
            out.push_char(ch);
            pos += ch.len_utf8();
        }
        out.finish()
    }

    /// Try every construct at `pos`, in precedence order. Returns the node and the
    /// number of bytes it spans.
    fn match_at(&self, text: &str, pos: usize, depth: usize) -> Option<(InlineNode, usize)> {
        let rest = &text[pos..];
        if rest.starts_with("![") {
            return self.image(rest);
        }
        if rest.starts_with('[') {
            return self.link(rest, depth);
        }
        if rest.starts_with("**") {
            if let Some(found) = self.strong(rest, depth) {
                return Some(found);
            }
        }
        if rest.starts_with('_') || rest.starts_with('*') {
            return self.emphasis(text, pos, depth);
        }
        None
    }

    fn image(&self, rest: &str) -> Option<(InlineNode, usize)> {
        let alt_end = 2 + rest[2..].find(']')?;
        let alt = &rest[2..alt_end];
        let (src, url_len) = self.destination(&rest[alt_end + 1..])?;
        let node = InlineNode::Image {
            src: src.to_string(),
            alt: alt.to_string(),
        };
        Some((node, alt_end + 1 + url_len))
    }

    fn link(&self, rest: &str, depth: usize) -> Option<(InlineNode, usize)> {
        let text_end = matching_bracket(rest)?;
        let label = &rest[1..text_end];
        if label.is_empty() {
            return None;
        }
        let (href, url_len) = self.destination(&rest[text_end + 1..])?;
        let node = InlineNode::Link {
            href: href.to_string(),
            children: self.scan(label, depth + 1),
        };
        Some((node, text_end + 1 + url_len))
    }

    fn strong(&self, rest: &str, depth: usize) -> Option<(InlineNode, usize)> {
        // At least one character of content; the closer can't overlap the opener.
        let first = rest[2..].chars().next()?;
        let search_from = 2 + first.len_utf8();
        let mut close = search_from + rest[search_from..].find("**")?;
        // `***x***` closes on the last pair so the inner `*x*` stays balanced.
        if first == '*' && rest[close + 2..].starts_with('*') {
            close += 1;
        }
        let inner = &rest[2..close];
        Some((InlineNode::Strong(self.scan(inner, depth + 1)), close + 2))
    }

    fn emphasis(&self, text: &str, pos: usize, depth: usize) -> Option<(InlineNode, usize)> {
        let rest = &text[pos..];
        let delimiter = rest.chars().next()?;
        let prev = text[..pos].chars().next_back();
        let next = rest[1..].chars().next();
        let opens = !is_word(prev) && next.is_some_and(|c| c != delimiter && !c.is_whitespace());
        if !opens {
            return None;
        }

        let body = &rest[1..];
        for (offset, ch) in body.char_indices() {
            if ch != delimiter || offset == 0 {
                continue;
            }
            let inner = &body[..offset];
            let before = inner.chars().next_back();
            let after = body[offset + 1..].chars().next();
            if before.is_some_and(|c| !c.is_whitespace()) && !is_word(after) {
                let node = InlineNode::Emphasis(self.scan(inner, depth + 1));
                return Some((node, 1 + offset + 1));
            }
        }
        None
    }

    /// Parse `(url)` at the start of `rest`. Returns the URL and the bytes consumed,
    /// parentheses included.
    fn destination<'t>(&self, rest: &'t str) -> Option<(&'t str, usize)> {
        let inner = rest.strip_prefix('(')?;
        let close = inner.find(')')?;
        let url = &inner[..close];
        if url.is_empty() || url.contains(char::is_whitespace) {
            return None;
        }
        if !self.options.url_policy.allows(url) {
            tracing::debug!(url, "refusing inline url");
            return None;
        }
        Some((url, close + 2))
    }
}

/// Byte offset of the `]` matching the `[` that opens `text`.
fn matching_bracket(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, ch) in text.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}

fn is_word(ch: Option<char>) -> bool {
    ch.map(|c| c.is_alphanumeric()).unwrap_or(false)
}

/// Accumulates plain text and merges adjacent plain segments.
#[derive(Default)]
struct ContentBuilder {
    buffer: String,
    children: InlineContent,
}

impl ContentBuilder {
    fn push_char(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn flush_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.buffer);
        if let Some(InlineNode::Plain(existing)) = self.children.last_mut() {
            existing.push_str(&text);
        } else {
            self.children.push(InlineNode::Plain(text));
        }
    }

    fn push_node(&mut self, node: InlineNode) {
        self.flush_buffer();
        self.children.push(node);
    }

    fn finish(mut self) -> InlineContent {
        self.flush_buffer();
        self.children
    }
}
