//! Structure Sources
//!
//! Produces the raw structure template a generation run starts from.
//! Three strategies: a uniform draw from a corpus of known templates, a
//! verbatim copy of a previously analyzed sentence's template, and a
//! caller-supplied literal.

use std::path::Path;

use rand::prelude::*;
use tracing::info;

use super::errors::{GenerationError, VocabularyError};
use super::sentence::Sentence;

/// Template used when the corpus has nothing to offer.
pub const FALLBACK_TEMPLATE: &str = "[noun] [verb] [noun]";

// ============================================================================
// Template Corpus
// ============================================================================

/// A flat list of known structure templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateCorpus {
    templates: Vec<String>,
}

impl TemplateCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a corpus from an in-memory template list.
    pub fn with_templates(templates: Vec<String>) -> Self {
        Self { templates }
    }

    /// Load a corpus from a text file, one template per line, blank lines
    /// ignored.
    pub fn from_path(path: &Path) -> Result<Self, VocabularyError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| VocabularyError::corpus_load_failed(path, e))?;
        let templates: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        info!(path = %path.display(), count = templates.len(), "Loaded template corpus");
        Ok(Self { templates })
    }

    /// Number of templates in the corpus.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Draw a uniformly random template, falling back to
    /// `"[noun] [verb] [noun]"` when the corpus is empty.
    pub fn random(&self, rng: &mut impl Rng) -> String {
        self.templates
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| FALLBACK_TEMPLATE.to_string())
    }
}

// ============================================================================
// Structure Source
// ============================================================================

/// Strategy deciding which raw template a generation run uses.
#[derive(Debug, Clone)]
pub enum StructureSource {
    /// Uniform draw from the corpus on every call.
    Random { corpus: TemplateCorpus },

    /// Verbatim template of a previously analyzed sentence.
    SameAsAnalyzed { template: String },

    /// Caller-supplied literal template.
    Selected { template: String },
}

impl StructureSource {
    /// Random-corpus strategy.
    pub fn random(corpus: TemplateCorpus) -> Self {
        Self::Random { corpus }
    }

    /// Copy the structure of an analyzed sentence. Fails when no source
    /// sentence is available.
    pub fn same_as_analyzed(source: Option<&Sentence>) -> Result<Self, GenerationError> {
        let source = source.ok_or_else(|| GenerationError::missing_source("same_as_analyzed"))?;
        Ok(Self::SameAsAnalyzed {
            template: source.structure_template.clone(),
        })
    }

    /// Use a caller-supplied template. Fails when no template is supplied;
    /// an empty string is a valid (empty) template.
    pub fn selected(template: Option<String>) -> Result<Self, GenerationError> {
        let template = template.ok_or(GenerationError::MissingTemplate)?;
        Ok(Self::Selected { template })
    }

    /// Produce one raw template. No side effects; the random strategy may
    /// yield a different result on each call, the other two are idempotent.
    pub fn generate(&self, rng: &mut impl Rng) -> String {
        match self {
            Self::Random { corpus } => corpus.random(rng),
            Self::SameAsAnalyzed { template } | Self::Selected { template } => template.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
