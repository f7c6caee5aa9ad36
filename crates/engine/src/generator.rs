//! Random prompt generation.
//!
//! One expansion pass scans the text left to right: whichever starts first
//! of the next top-level variant group and the next wildcard token is
//! resolved, its fully-expanded replacement is spliced in, and scanning
//! resumes after the replacement. Nested content is expanded recursively
//! under an explicit depth counter, so self-referential wildcards fail with
//! a recursion error instead of hanging.

use std::sync::Arc;

use promptforge_domain::{next_variant_group, next_wildcard_token, CombinationSpec};

use crate::error::ExpandError;
use crate::infrastructure::ports::WildcardCatalog;
use crate::rng::PromptRng;
use crate::settings::EngineSettings;

/// Expands templates into concrete prompt strings.
///
/// One instance owns one random stream, initialized exactly once at
/// construction according to the seed policy. Every draw advances the
/// stream and it is never re-seeded between calls, so generating n prompts
/// one call at a time yields the same sequence as one n-prompt batch.
///
/// # Example
///
/// ```ignore
/// use promptforge_engine::{MemoryWildcardCatalog, RandomPromptGenerator};
///
/// let catalog = Arc::new(MemoryWildcardCatalog::new().with_wildcard("colors", ["red", "blue"]));
/// let mut generator = RandomPromptGenerator::new(catalog, "a __colors__ {cat|dog}");
/// let prompts = generator.generate(4)?;
/// ```
pub struct RandomPromptGenerator {
    catalog: Arc<dyn WildcardCatalog>,
    template: String,
    rng: PromptRng,
    settings: EngineSettings,
}

impl RandomPromptGenerator {
    /// Create a generator with default settings and no explicit seed
    pub fn new(catalog: Arc<dyn WildcardCatalog>, template: impl Into<String>) -> Self {
        Self::with_options(catalog, template, None, EngineSettings::default())
    }

    /// Create a generator with an explicit seed and settings
    ///
    /// In linked mode (the default) the stream derives from `seed`, falling
    /// back to `settings.default_seed()` when none is given. In unlinked
    /// mode any supplied seed is ignored and the stream takes OS entropy.
    pub fn with_options(
        catalog: Arc<dyn WildcardCatalog>,
        template: impl Into<String>,
        seed: Option<u64>,
        settings: EngineSettings,
    ) -> Self {
        let rng = if settings.unlink_seed_from_prompt() {
            PromptRng::unlinked()
        } else {
            PromptRng::linked(seed.unwrap_or_else(|| settings.default_seed()))
        };

        tracing::debug!(
            seed = ?seed,
            unlinked = settings.unlink_seed_from_prompt(),
            "Prompt generator constructed"
        );

        Self {
            catalog,
            template: template.into(),
            rng,
            settings,
        }
    }

    /// The stored template
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Replace the stored template; the random stream is left untouched
    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
    }

    /// Resolve one prompt from the given template text
    pub fn expand(&mut self, template: &str) -> Result<String, ExpandError> {
        self.expand_at_depth(template, 0)
    }

    /// Resolve `count` prompts from the stored template, in draw order
    pub fn generate(&mut self, count: usize) -> Result<Vec<String>, ExpandError> {
        tracing::debug!(count, "Generating prompt batch");

        let template = self.template.clone();
        let mut prompts = Vec::new();
        for _ in 0..count {
            prompts.push(self.expand_at_depth(&template, 0)?);
        }
        Ok(prompts)
    }

    // ============================================================================
    // Expansion pass
    // ============================================================================

    fn expand_at_depth(&mut self, text: &str, depth: usize) -> Result<String, ExpandError> {
        if depth > self.settings.max_expansion_depth() {
            return Err(ExpandError::RecursionLimit {
                limit: self.settings.max_expansion_depth(),
            });
        }

        let mut resolved = text.to_string();
        let mut cursor = 0;

        loop {
            let group = next_variant_group(&resolved, cursor)?;
            let token = next_wildcard_token(&resolved, cursor);

            // Resolve whichever substitution form starts first
            let (span, replacement) = match (group, token) {
                (None, None) => break,
                (Some(group), None) => {
                    let replacement = self.resolve_group(&group.body, depth)?;
                    (group.span, replacement)
                }
                (None, Some(token)) => {
                    let replacement = self.resolve_wildcard(&token.name, depth)?;
                    (token.span, replacement)
                }
                (Some(group), Some(token)) => {
                    if group.span.start <= token.span.start {
                        let replacement = self.resolve_group(&group.body, depth)?;
                        (group.span, replacement)
                    } else {
                        let replacement = self.resolve_wildcard(&token.name, depth)?;
                        (token.span, replacement)
                    }
                }
            };

            // Replacements are final; scanning continues after them
            cursor = span.start + replacement.len();
            resolved.replace_range(span, &replacement);
        }

        Ok(resolved)
    }

    /// Parse one variant group body, draw a combination, and expand it
    ///
    /// Draws the pick count from the parsed count range, then that many options
    /// independently and uniformly with replacement, each recursively
    /// expanded in draw order before joining. The range is checked against
    /// `max_pick_count` before anything is drawn or allocated.
    fn resolve_group(&mut self, body: &str, depth: usize) -> Result<String, ExpandError> {
        let spec = CombinationSpec::parse(body)?;

        // The count comes from template text; bound it before it sizes anything
        if spec.max_count() > self.settings.max_pick_count() {
            return Err(ExpandError::PickCountLimit {
                count: spec.max_count(),
                limit: self.settings.max_pick_count(),
            });
        }

        let count = self.rng.pick_count(spec.min_count(), spec.max_count());

        let mut picks = Vec::new();
        for _ in 0..count {
            let index = self.rng.pick_index(spec.options().len());
            picks.push(self.expand_at_depth(&spec.options()[index], depth + 1)?);
        }

        // join covers every count: zero picks yield "", one pick is verbatim
        let separator = format!(" {} ", spec.joiner());
        let joined = picks.join(separator.as_str());
        tracing::trace!(body, count, "Resolved variant group");
        Ok(joined)
    }

    /// Look up a wildcard, draw one candidate, and expand it
    fn resolve_wildcard(&mut self, name: &str, depth: usize) -> Result<String, ExpandError> {
        let mut candidates = self.catalog.lookup(name)?;
        // An empty candidate list behaves like an empty options field
        if candidates.is_empty() {
            candidates.push(String::new());
        }

        let index = self.rng.pick_index(candidates.len());
        let replacement = self.expand_at_depth(&candidates[index], depth + 1)?;
        tracing::trace!(name, "Resolved wildcard token");
        Ok(replacement)
    }
}
