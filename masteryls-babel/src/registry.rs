//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name or guessed from a file path.

use crate::error::FormatError;
use crate::format::Format;
use masteryls_parser::{Extraction, RenderContext};
use std::collections::HashMap;
use std::path::Path;

/// Registry of source formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let format = registry.for_path(Path::new("lesson.md"))?;
/// let extraction = format.render(source, &mut RenderContext::default())?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// The format claiming `extension` (case-insensitive, without the dot).
    ///
    /// When several formats claim it, the first by name wins.
    pub fn for_extension(&self, extension: &str) -> Result<&dyn Format, FormatError> {
        self.list_formats()
            .iter()
            .filter_map(|name| self.formats.get(name))
            .find(|format| {
                format
                    .file_extensions()
                    .iter()
                    .any(|claimed| claimed.eq_ignore_ascii_case(extension))
            })
            .map(|format| format.as_ref())
            .ok_or_else(|| {
                FormatError::NotSupported(format!(
                    "no format handles '.{}' files",
                    extension
                ))
            })
    }

    /// Guess the format of a file from its extension
    pub fn for_path(&self, path: &Path) -> Result<&dyn Format, FormatError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                FormatError::NotSupported(format!(
                    "cannot guess the format of '{}' without an extension",
                    path.display()
                ))
            })?;
        self.for_extension(extension)
    }

    /// Render source text using the specified format
    pub fn render(
        &self,
        source: &str,
        format: &str,
        context: &mut RenderContext,
    ) -> Result<Extraction, FormatError> {
        self.get(format)?.render(source, context)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::MarkdownFormat);
        registry.register(crate::formats::HtmlFormat);
        registry.register(crate::formats::MarkdownHtmlFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
