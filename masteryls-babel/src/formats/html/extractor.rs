//! Locating and decoding quiz code blocks in HTML

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use masteryls_parser::QuizCandidate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Class token that marks a code block as a quiz.
pub const QUIZ_CLASS: &str = "language-masteryls";

static PRE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<(/?)pre\b[^>]*>").expect("pre tag regex is valid"));

/// Quiz blocks of an HTML document, with spans covering the whole `<pre>` element.
pub fn quiz_candidates(source: &str) -> Vec<QuizCandidate> {
    pre_elements(source)
        .into_iter()
        .filter_map(|span| {
            let payload = decode_quiz_block(&source[span.clone()])?;
            tracing::trace!(start = span.start, end = span.end, "found html quiz block");
            Some(QuizCandidate { span, payload })
        })
        .collect()
}

/// Byte spans of `<pre>` elements, each from its start tag to its own end tag.
///
/// A start tag seen while another `<pre>` is still open replaces it, so no span ever
/// contains two `<pre>` start tags. Unclosed elements are dropped.
fn pre_elements(source: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut open: Option<usize> = None;
    for caps in PRE_TAG.captures_iter(source) {
        let (Some(tag), Some(slash)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if slash.as_str().is_empty() {
            open = Some(tag.start());
        } else if let Some(start) = open.take() {
            spans.push(start..tag.end());
        }
    }
    spans
}

/// The decoded text of a `<pre><code>` fragment, if it is tagged as a quiz.
fn decode_quiz_block(fragment: &str) -> Option<String> {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(fragment);
    let pre = find_element(&dom.document, "pre")?;
    let code = find_element(&pre, "code")?;
    if !has_class(&code, QUIZ_CLASS) && !has_class(&pre, QUIZ_CLASS) {
        return None;
    }
    let mut text = String::new();
    collect_text(&code, &mut text);
    Some(text)
}

/// First descendant element named `tag`, depth first.
fn find_element(node: &Handle, tag: &str) -> Option<Handle> {
    for child in node.children.borrow().iter() {
        if is_element(child, tag) {
            return Some(child.clone());
        }
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}

fn is_element(node: &Handle, tag: &str) -> bool {
    match &node.data {
        NodeData::Element { name, .. } => &*name.local == tag,
        _ => false,
    }
}

fn has_class(node: &Handle, class: &str) -> bool {
    let NodeData::Element { attrs, .. } = &node.data else {
        return false;
    };
    let attrs = attrs.borrow();
    attrs.iter().any(|attr| {
        &*attr.name.local == "class"
            && attr
                .value
                .split_ascii_whitespace()
                .any(|token| token == class)
    })
}

fn collect_text(node: &Handle, out: &mut String) {
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element { .. } => collect_text(child, out),
            _ => {}
        }
    }
}
