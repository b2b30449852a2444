//! CLI commands
//!
//! Each command reads one document, runs it through the babel formats and returns the text
//! to print. Printing and exit codes stay in main.rs.

use anyhow::{anyhow, Context, Result};
use masteryls_babel::{Format, FormatRegistry};
use masteryls_config::MasterylsConfig;
use masteryls_parser::{
    render_candidates, score as score_selection, BlockOutcome, Extraction, QuizBlock,
    RenderContext,
};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// JSON report printed by `inspect`.
#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    path: String,
    format: &'a str,
    quizzes: usize,
    preserved: usize,
    blocks: &'a [BlockOutcome],
}

/// The document with its quiz blocks replaced.
pub fn render(path: &Path, format: Option<&str>, config: &MasterylsConfig) -> Result<String> {
    let registry = FormatRegistry::with_defaults();
    let format = resolve_format(&registry, path, format)?;
    let source = read_source(path)?;

    let mut context = RenderContext::new(config.render_options());
    let extraction = format
        .render(&source, &mut context)
        .with_context(|| format!("failed to render {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        format = format.name(),
        rendered = extraction.rendered().count(),
        preserved = extraction.preserved_count(),
        "rendered document"
    );
    Ok(extraction.output)
}

/// A JSON report of every quiz block, with spans into the source file.
pub fn inspect(path: &Path, format: Option<&str>, config: &MasterylsConfig) -> Result<String> {
    let registry = FormatRegistry::with_defaults();
    let format = resolve_format(&registry, path, format)?;
    let source = read_source(path)?;
    let extraction = locate(format, &source, config)?;

    let report = InspectReport {
        path: path.display().to_string(),
        format: format.name(),
        quizzes: extraction.rendered().count(),
        preserved: extraction.preserved_count(),
        blocks: &extraction.blocks,
    };
    serde_json::to_string_pretty(&report).context("failed to serialize the report")
}

/// Score `selected` against the quiz named by `selector` and return the result as JSON.
pub fn score(
    path: &Path,
    format: Option<&str>,
    selector: &str,
    selected: &[usize],
    config: &MasterylsConfig,
) -> Result<String> {
    let registry = FormatRegistry::with_defaults();
    let format = resolve_format(&registry, path, format)?;
    let source = read_source(path)?;
    let extraction = locate(format, &source, config)?;

    let quiz = find_quiz(&extraction, selector)
        .with_context(|| format!("cannot score {}", path.display()))?;
    let result = score_selection(selected.iter().copied(), quiz)
        .with_context(|| format!("cannot score quiz '{selector}'"))?;
    tracing::info!(quiz = selector, percent = result.percent_correct, "scored selection");
    serde_json::to_string_pretty(&result).context("failed to serialize the score")
}

/// One line per registered format.
pub fn formats() -> String {
    let registry = FormatRegistry::with_defaults();
    let mut out = String::from("Available formats:\n\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let extensions = format.file_extensions();
        if extensions.is_empty() {
            out.push_str(&format!("  {name}\n"));
        } else {
            out.push_str(&format!("  {name} (.{})\n", extensions.join(", .")));
        }
        out.push_str(&format!("    {}\n", format.description()));
    }
    out
}

fn resolve_format<'r>(
    registry: &'r FormatRegistry,
    path: &Path,
    name: Option<&str>,
) -> Result<&'r dyn Format> {
    let format = match name {
        Some(name) => registry.get(name)?,
        None => registry.for_path(path)?,
    };
    tracing::debug!(format = format.name(), "selected format");
    Ok(format)
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Parse every quiz block of `source` where it sits, keeping spans into `source`.
fn locate(format: &dyn Format, source: &str, config: &MasterylsConfig) -> Result<Extraction> {
    let candidates = format.candidates(source)?;
    let mut context = RenderContext::new(config.render_options());
    Ok(render_candidates(source, candidates, &mut context))
}

/// Match `selector` against quiz keys (which are the ids when present), then as a 1-based
/// position among the quizzes that parsed.
fn find_quiz<'e>(extraction: &'e Extraction, selector: &str) -> Result<&'e QuizBlock> {
    if let Some((_, quiz)) = extraction.rendered().find(|(key, _)| *key == selector) {
        return Ok(quiz);
    }
    if let Ok(position) = selector.parse::<usize>() {
        if let Some((_, quiz)) = position
            .checked_sub(1)
            .and_then(|index| extraction.rendered().nth(index))
        {
            return Ok(quiz);
        }
    }

    let available: Vec<&str> = extraction.rendered().map(|(key, _)| key).collect();
    Err(anyhow!(
        "no quiz '{}' in the document (available: {})",
        selector,
        if available.is_empty() {
            "none".to_string()
        } else {
            available.join(", ")
        }
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use masteryls_parser::replace_quiz_blocks;

    const DOCUMENT: &str = "```masteryls\n{\"id\":\"first\"}\n- [x] a\n```\n\n```masteryls\n- [ ] b\n- [x] c\n```\n";

    fn extraction() -> Extraction {
        replace_quiz_blocks(DOCUMENT, &mut RenderContext::default())
    }

    #[test]
    fn finds_quiz_by_id() {
        let extraction = extraction();
        let quiz = find_quiz(&extraction, "first").unwrap();
        assert_eq!(quiz.id(), Some("first"));
    }

    #[test]
    fn finds_quiz_by_fallback_key() {
        let extraction = extraction();
        let quiz = find_quiz(&extraction, "masteryls-auto-1").unwrap();
        assert_eq!(quiz.options()[1].text, "c");
    }

    #[test]
    fn finds_quiz_by_position() {
        let extraction = extraction();
        assert_eq!(find_quiz(&extraction, "1").unwrap().id(), Some("first"));
        assert_eq!(find_quiz(&extraction, "2").unwrap().id(), None);
    }

    #[test]
    fn unknown_quiz_lists_available_keys() {
        let extraction = extraction();
        for selector in ["0", "3", "missing"] {
            let message = find_quiz(&extraction, selector).unwrap_err().to_string();
            assert!(message.contains("first, masteryls-auto-1"), "{message}");
        }
    }

    #[test]
    fn formats_lists_every_registered_format() {
        let listing = formats();
        assert!(listing.contains("  html (.html, .htm)\n"));
        assert!(listing.contains("  markdown (.md, .markdown)\n"));
        assert!(listing.contains("  markdown-html\n"));
    }
}
