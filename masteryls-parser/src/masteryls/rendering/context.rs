use crate::masteryls::inlines::InlineOptions;
use crate::masteryls::quiz::QuizBlock;
use std::collections::HashSet;

/// Knobs for the emitted markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix of generated keys for quizzes without an id.
    pub fallback_key_prefix: String,
    pub submit_label: String,
    pub reset_label: String,
    /// Emit the metadata `body` above the options.
    pub show_body: bool,
    pub inline: InlineOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fallback_key_prefix: "masteryls-auto".to_string(),
            submit_label: "Submit".to_string(),
            reset_label: "Reset".to_string(),
            show_body: true,
            inline: InlineOptions::default(),
        }
    }
}

/// State scoped to one render pass over one document.
///
/// Hands out fallback keys `<prefix>-1`, `<prefix>-2`, ... in document order and remembers
/// every key it has handed out, so no two quizzes of a pass share an input group or root id.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    options: RenderOptions,
    issued: usize,
    used: HashSet<String>,
}

impl RenderContext {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            issued: 0,
            used: HashSet::new(),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The group key for `block`: its id, or a fresh fallback key.
    ///
    /// An id already taken earlier in the pass gets a `-2`, `-3`, ... suffix.
    pub fn key_for(&mut self, block: &QuizBlock) -> String {
        let Some(id) = block.id() else {
            return self.fallback_key();
        };
        if self.used.insert(id.to_string()) {
            return id.to_string();
        }
        let key = (2..)
            .map(|n| format!("{id}-{n}"))
            .find(|candidate| !self.used.contains(candidate))
            .unwrap_or_default();
        tracing::warn!(id, key = %key, "quiz id already used in this document");
        self.used.insert(key.clone());
        key
    }

    /// The next `<prefix>-N` not already taken in this pass.
    pub fn fallback_key(&mut self) -> String {
        loop {
            self.issued += 1;
            let key = format!("{}-{}", self.options.fallback_key_prefix, self.issued);
            if self.used.insert(key.clone()) {
                return key;
            }
        }
    }

    /// Counter behind the fallback keys; the last `N` used in `<prefix>-N`.
    pub fn issued(&self) -> usize {
        self.issued
    }
}
