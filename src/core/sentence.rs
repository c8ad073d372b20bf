//! Sentence Data Model
//!
//! Defines the `Sentence` aggregate that flows through the generation
//! pipeline, the part-of-speech taxonomy, and the placeholder tokens a
//! structure template may contain.
//!
//! A `Sentence` is created fresh per generation or analysis call, fully
//! populated by the pipeline, and handed to the caller. It has no
//! persistent identity beyond that call.

use serde::{Deserialize, Serialize};

/// Placeholder token marking a recursive sentence slot in a raw template.
pub const SENTENCE_TOKEN: &str = "[sentence]";

// ============================================================================
// Part of Speech
// ============================================================================

/// Word categories the engine substitutes into templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
}

impl PartOfSpeech {
    /// All parts of speech, in substitution order: nouns, then verbs,
    /// then adjectives. The assembler depends on this order.
    pub fn all() -> &'static [PartOfSpeech] {
        &[
            PartOfSpeech::Noun,
            PartOfSpeech::Verb,
            PartOfSpeech::Adjective,
        ]
    }

    /// The placeholder token for this part of speech.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Noun => "[noun]",
            Self::Verb => "[verb]",
            Self::Adjective => "[adjective]",
        }
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Noun => write!(f, "noun"),
            Self::Verb => write!(f, "verb"),
            Self::Adjective => write!(f, "adjective"),
        }
    }
}

/// Count occurrences of a placeholder token in a template.
pub fn placeholder_count(template: &str, token: &str) -> usize {
    template.match_indices(token).count()
}

// ============================================================================
// Moderation Scores
// ============================================================================

/// Named confidence scores written by the external moderation collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ModerationScores {
    pub toxicity: f32,
    pub profanity: f32,
    pub insult: f32,
    pub sexual: f32,
    pub political: f32,
}

impl ModerationScores {
    /// Highest confidence across all categories.
    pub fn max_score(&self) -> f32 {
        [
            self.toxicity,
            self.profanity,
            self.insult,
            self.sexual,
            self.political,
        ]
        .into_iter()
        .fold(0.0, f32::max)
    }

    /// Check whether any category meets or exceeds a threshold.
    pub fn flags_at(&self, threshold: f32) -> bool {
        self.max_score() >= threshold
    }
}

// ============================================================================
// Sentence
// ============================================================================

/// The aggregate flowing through the pipeline: source or finished text,
/// its structure template, word lists keyed by part of speech, and the
/// optional payloads written by external collaborators.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Sentence {
    /// The finished or source sentence text.
    pub text: String,

    /// Literal words mixed with placeholder tokens.
    pub structure_template: String,

    /// Opaque payload from the external syntax analyzer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax_tree: Option<serde_json::Value>,

    /// Nouns in substitution order.
    #[serde(default)]
    pub nouns: Vec<String>,

    /// Verbs in substitution order.
    #[serde(default)]
    pub verbs: Vec<String>,

    /// Adjectives in substitution order.
    #[serde(default)]
    pub adjectives: Vec<String>,

    /// Scores written by the external moderation collaborator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderation_scores: Option<ModerationScores>,
}

impl Sentence {
    /// Create an empty sentence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sentence carrying only a structure template.
    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            structure_template: template.into(),
            ..Self::default()
        }
    }

    /// Word list for a part of speech.
    pub fn words(&self, part: PartOfSpeech) -> &Vec<String> {
        match part {
            PartOfSpeech::Noun => &self.nouns,
            PartOfSpeech::Verb => &self.verbs,
            PartOfSpeech::Adjective => &self.adjectives,
        }
    }

    /// Mutable word list for a part of speech.
    pub fn words_mut(&mut self, part: PartOfSpeech) -> &mut Vec<String> {
        match part {
            PartOfSpeech::Noun => &mut self.nouns,
            PartOfSpeech::Verb => &mut self.verbs,
            PartOfSpeech::Adjective => &mut self.adjectives,
        }
    }

    /// Placeholder count in this sentence's template for a part of speech.
    pub fn slots(&self, part: PartOfSpeech) -> usize {
        placeholder_count(&self.structure_template, part.token())
    }
}

// ============================================================================
// Tests
// ============================================================================
