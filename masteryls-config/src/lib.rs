//! Shared configuration loader for the masteryls tools.
//!
//! `defaults/masteryls.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MasterylsConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use masteryls_parser::{InlineOptions, RenderOptions, UrlPolicy};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/masteryls.default.toml");

/// Name of the optional per-project file picked up from the working directory.
pub const PROJECT_FILE: &str = "masteryls.toml";

/// Top-level configuration consumed by masteryls applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MasterylsConfig {
    pub render: RenderConfig,
    pub inline: InlineConfig,
    pub logging: LoggingConfig,
}

/// Mirrors the knobs of the quiz renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub fallback_key_prefix: String,
    pub submit_label: String,
    pub reset_label: String,
    pub show_body: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InlineConfig {
    pub max_depth: usize,
    pub url_policy: UrlPolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// A tracing filter directive such as `warn` or `masteryls_parser=debug`.
    pub level: String,
}

impl MasterylsConfig {
    /// Options for a render pass.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            fallback_key_prefix: self.render.fallback_key_prefix.clone(),
            submit_label: self.render.submit_label.clone(),
            reset_label: self.render.reset_label.clone(),
            show_body: self.render.show_body,
            inline: InlineOptions {
                max_depth: self.inline.max_depth,
                url_policy: self.inline.url_policy,
            },
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        let prefix = &self.render.fallback_key_prefix;
        if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::Message(format!(
                "render.fallback_key_prefix must be a non-empty word, got {prefix:?}"
            )));
        }
        Ok(self)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MasterylsConfig, ConfigError> {
        self.builder
            .build()?
            .try_deserialize::<MasterylsConfig>()?
            .validate()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MasterylsConfig, ConfigError> {
    Loader::new().build()
}
