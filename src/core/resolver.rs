//! Template Resolver
//!
//! Eliminates recursive `[sentence]` self-references from a raw template.
//! With recursion disabled, sentence slots degrade to `[noun]` in a single
//! pass. With recursion enabled, each `[sentence]` token expands into a
//! freshly generated template resolved one level deeper, until no tokens
//! remain or the depth bound is hit, at which point remaining tokens
//! degrade to `[noun]`.
//!
//! Each expanded branch draws its own template from the structure source,
//! so a random source yields independently shaped nested structures. That
//! is intentional.

use rand::Rng;
use tracing::debug;

use super::sentence::{PartOfSpeech, SENTENCE_TOKEN};
use super::structure::StructureSource;

/// Expands and bounds recursive structural placeholders.
#[derive(Debug)]
pub struct TemplateResolver<'a> {
    source: &'a StructureSource,
    recursion_enabled: bool,
    max_depth: u32,
}

impl<'a> TemplateResolver<'a> {
    /// Create a resolver over a structure source.
    pub fn new(source: &'a StructureSource, recursion_enabled: bool, max_depth: u32) -> Self {
        Self {
            source,
            recursion_enabled,
            max_depth,
        }
    }

    /// Resolve a raw template. The result never contains `[sentence]`.
    pub fn resolve(&self, template: &str, rng: &mut impl Rng) -> String {
        let resolved = self.resolve_at(template, 0, rng);
        debug!(template, resolved, "Resolved structure template");
        resolved
    }

    fn resolve_at(&self, template: &str, depth: u32, rng: &mut impl Rng) -> String {
        if !self.recursion_enabled || depth > self.max_depth {
            return template.replace(SENTENCE_TOKEN, PartOfSpeech::Noun.token());
        }

        let mut resolved = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(pos) = rest.find(SENTENCE_TOKEN) {
            resolved.push_str(&rest[..pos]);
            let branch = self.source.generate(rng);
            resolved.push_str(&self.resolve_at(&branch, depth + 1, rng));
            rest = &rest[pos + SENTENCE_TOKEN.len()..];
        }
        resolved.push_str(rest);
        resolved
    }
}

// ============================================================================
// Tests
// ============================================================================
