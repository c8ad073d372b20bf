//! Generation Orchestrator
//!
//! Validates inputs, wires the chosen strategies, and drives the pipeline
//! end to end: structure source, template resolution, word selection,
//! assembly. Moderation is layered above the orchestrator; the finished
//! sentence's text is what that layer forwards.

use rand::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::assembler::SentenceAssembler;
use super::conjugate::Tense;
use super::errors::GenerationError;
use super::resolver::TemplateResolver;
use super::selector::WordSelector;
use super::sentence::Sentence;
use super::structure::{StructureSource, TemplateCorpus};
use super::vocabulary::WordBank;

// ============================================================================
// Request Types
// ============================================================================

/// Which structure strategy a generation run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    /// Uniform draw from the template corpus.
    #[default]
    Random,
    /// Reuse the template of a previously analyzed sentence.
    SameAsAnalyzed,
    /// Use the request's explicit template.
    Selected,
}

impl StructureKind {
    /// The strategy key this kind parses from.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::SameAsAnalyzed => "same_as_analyzed",
            Self::Selected => "selected",
        }
    }
}

impl std::str::FromStr for StructureKind {
    type Err = GenerationError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "random" => Ok(Self::Random),
            "same_as_analyzed" => Ok(Self::SameAsAnalyzed),
            "selected" => Ok(Self::Selected),
            other => Err(GenerationError::unknown_strategy(other)),
        }
    }
}

/// One generation run's inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Structure strategy.
    pub structure: StructureKind,

    /// Explicit template, required by `StructureKind::Selected`.
    pub template: Option<String>,

    /// Conjugate verbs into the future tense.
    pub future_tense: bool,

    /// Draw fresh words (true) or reuse the analyzed sentence's words (false).
    pub use_new_words: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            structure: StructureKind::Random,
            template: None,
            future_tense: false,
            use_new_words: true,
        }
    }
}

/// Recursion bounds for template resolution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Expand `[sentence]` slots recursively instead of degrading them.
    pub recursion_enabled: bool,

    /// Maximum nesting depth before remaining slots degrade to `[noun]`.
    pub max_recursion_depth: u32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            recursion_enabled: true,
            max_recursion_depth: 3,
        }
    }
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Facade over the generation pipeline.
#[derive(Debug)]
pub struct Orchestrator {
    corpus: TemplateCorpus,
    bank: WordBank,
    settings: GeneratorSettings,
}

impl Orchestrator {
    /// Create an orchestrator over a template corpus and word bank.
    pub fn new(corpus: TemplateCorpus, bank: WordBank, settings: GeneratorSettings) -> Self {
        Self {
            corpus,
            bank,
            settings,
        }
    }

    /// The word bank the pipeline draws from.
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Mutable word bank access, for configuration refreshes.
    pub fn bank_mut(&mut self) -> &mut WordBank {
        &mut self.bank
    }

    /// Run one generation with a thread-local RNG.
    pub fn generate(
        &self,
        request: &GenerationRequest,
        source: Option<&Sentence>,
    ) -> Result<Sentence, GenerationError> {
        self.generate_with_rng(request, source, &mut rand::thread_rng())
    }

    /// Run one generation with a caller-supplied RNG. Seeding the RNG makes
    /// the run reproducible.
    pub fn generate_with_rng(
        &self,
        request: &GenerationRequest,
        source: Option<&Sentence>,
        rng: &mut impl Rng,
    ) -> Result<Sentence, GenerationError> {
        // All argument validation happens in the strategy constructors,
        // before the target sentence exists.
        let structure = match request.structure {
            StructureKind::Random => StructureSource::random(self.corpus.clone()),
            StructureKind::SameAsAnalyzed => StructureSource::same_as_analyzed(source)?,
            StructureKind::Selected => StructureSource::selected(request.template.clone())?,
        };
        let selector = if request.use_new_words {
            WordSelector::New
        } else {
            WordSelector::original(source)?
        };
        let tense = Tense::from_future_flag(request.future_tense);

        let raw = structure.generate(rng);
        let resolver = TemplateResolver::new(
            &structure,
            self.settings.recursion_enabled,
            self.settings.max_recursion_depth,
        );
        let resolved = resolver.resolve(&raw, rng);

        let mut sentence = Sentence::with_template(resolved);
        selector.populate(&mut sentence, &self.bank, tense, rng)?;
        SentenceAssembler::assemble(&mut sentence);

        info!(
            strategy = request.structure.key(),
            new_words = request.use_new_words,
            text = %sentence.text,
            "Generated sentence"
        );
        Ok(sentence)
    }
}

// ============================================================================
// Tests
// ============================================================================
