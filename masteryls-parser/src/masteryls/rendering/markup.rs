use super::context::RenderContext;
use crate::masteryls::inlines::{escape, render_inline_with, SafeMarkup};
use crate::masteryls::quiz::QuizBlock;
use serde::Serialize;
use std::borrow::Cow;

/// Input control used for the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputStyle {
    Radio,
    Checkbox,
}

impl InputStyle {
    /// Radio for single-answer declared types, checkbox for everything else, including
    /// blocks that declare no type. The correctness flags play no part.
    pub fn for_block(block: &QuizBlock) -> Self {
        match block.declared_type() {
            Some(declared) if declared.is_single_answer() => InputStyle::Radio,
            _ => InputStyle::Checkbox,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InputStyle::Radio => "radio",
            InputStyle::Checkbox => "checkbox",
        }
    }
}

/// Rendered quiz plus the facts a host needs to attach listeners to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveMarkup {
    /// Group key shared by the quiz's inputs and buttons.
    pub key: String,
    pub input_style: InputStyle,
    pub markup: SafeMarkup,
}

impl InteractiveMarkup {
    /// The root element id.
    pub fn root_id(&self) -> String {
        root_id(&self.key)
    }

    /// The `name` shared by the option inputs.
    pub fn group_name(&self) -> String {
        group_name(&self.key)
    }
}

fn root_id(key: &str) -> String {
    format!("masteryls-quiz-{key}")
}

fn group_name(key: &str) -> String {
    format!("masteryls-{key}")
}

/// `text` with its line breaks folded into single spaces.
///
/// The markup is embedded in markdown as a raw HTML block, which a blank line would end.
fn single_line(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r']) {
        return Cow::Borrowed(text);
    }
    let words: Vec<&str> = text
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    Cow::Owned(words.join(" "))
}

fn attr(value: &str) -> String {
    escape(&single_line(value)).into_owned()
}

/// Render `block` as interactive markup. Option `i` of the block is input `i` of the
/// markup.
pub fn render_quiz(block: &QuizBlock, context: &mut RenderContext) -> InteractiveMarkup {
    let key = context.key_for(block);
    let options = context.options();
    let input_style = InputStyle::for_block(block);
    let key_attr = attr(&key);
    let group = group_name(&key);

    let mut out = String::new();
    out.push_str(&format!(
        "<div class=\"masteryls-quiz\" id=\"{}\" data-quiz-key=\"{}\"",
        attr(&root_id(&key)),
        key_attr
    ));
    if let Some(id) = block.id() {
        out.push_str(&format!(" data-quiz-id=\"{}\"", attr(id)));
    }
    out.push_str(&format!(" data-quiz-title=\"{}\"", attr(block.title())));
    if let Some(declared) = block.declared_type() {
        out.push_str(&format!(" data-quiz-type=\"{}\"", attr(declared.as_str())));
    }
    out.push_str(&format!(" data-quiz-kind=\"{}\">\n", block.kind().as_str()));

    out.push_str(&format!(
        "<div class=\"masteryls-quiz-title\">{}</div>\n",
        render_inline_with(&single_line(block.title()), &options.inline)
    ));
    if let Some(body) = block.body().filter(|_| options.show_body) {
        out.push_str(&format!(
            "<div class=\"masteryls-quiz-body\">{}</div>\n",
            render_inline_with(&single_line(body), &options.inline)
        ));
    }

    out.push_str("<fieldset class=\"masteryls-quiz-options\">\n");
    for (index, option) in block.options().iter().enumerate() {
        out.push_str(&format!(
            "<label class=\"masteryls-quiz-option\"><input type=\"{}\" name=\"{}\" value=\"{index}\" data-option-index=\"{index}\" data-correct=\"{}\"> <span class=\"masteryls-quiz-option-text\">{}</span></label>\n",
            input_style.as_str(),
            attr(&group),
            option.correct,
            render_inline_with(&single_line(&option.text), &options.inline)
        ));
    }
    out.push_str("</fieldset>\n");

    out.push_str(&format!(
        "<div class=\"masteryls-quiz-actions\"><button type=\"button\" data-action=\"submit\" data-quiz-key=\"{key_attr}\">{}</button> <button type=\"button\" data-action=\"reset\" data-quiz-key=\"{key_attr}\">{}</button></div>\n",
        attr(&options.submit_label),
        attr(&options.reset_label)
    ));
    out.push_str("<div class=\"masteryls-quiz-result\" aria-live=\"polite\"></div>\n");
    out.push_str("</div>\n");

    InteractiveMarkup {
        key,
        input_style,
        markup: SafeMarkup::trusted(out),
    }
}
