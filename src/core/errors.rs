//! Generation Engine Error Types
//!
//! Defines error types for the sentence synthesis pipeline and its
//! collaborator boundaries. Uses thiserror for ergonomic error handling
//! with rich context fields.

use std::path::PathBuf;
use thiserror::Error;

use super::sentence::PartOfSpeech;

// ============================================================================
// Generation Errors
// ============================================================================

/// Invalid-argument class errors raised by strategy constructors and the
/// orchestrator. Always detected before any mutation of the target sentence.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The chosen strategy needs a previously analyzed sentence.
    #[error(
        "Strategy '{strategy}' requires an analyzed source sentence: \
         analyze a sentence first, or switch to new words with a random or selected structure"
    )]
    MissingSourceSentence { strategy: String },

    /// The selected-structure strategy was chosen without a template string.
    #[error("No template supplied for the selected-structure strategy")]
    MissingTemplate,

    /// Strategy key not recognized.
    #[error("Unknown strategy key '{key}'")]
    UnknownStrategy { key: String },

    /// Conjugation was asked to tense an empty word.
    #[error("Cannot conjugate an empty word")]
    EmptyWord,
}

impl GenerationError {
    /// Create a MissingSourceSentence error.
    pub fn missing_source(strategy: impl Into<String>) -> Self {
        Self::MissingSourceSentence {
            strategy: strategy.into(),
        }
    }

    /// Create an UnknownStrategy error.
    pub fn unknown_strategy(key: impl Into<String>) -> Self {
        Self::UnknownStrategy { key: key.into() }
    }
}

// ============================================================================
// Vocabulary Errors
// ============================================================================

/// Errors that can occur when loading word lists or the template corpus.
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// Failed to load a word list from file.
    #[error("Failed to load {part} vocabulary from {path}: {source}")]
    LoadFailed {
        part: PartOfSpeech,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load the structure-template corpus from file.
    #[error("Failed to load template corpus from {path}: {source}")]
    CorpusLoadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl VocabularyError {
    /// Create a LoadFailed error.
    pub fn load_failed(part: PartOfSpeech, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::LoadFailed {
            part,
            path: path.into(),
            source,
        }
    }

    /// Create a CorpusLoadFailed error.
    pub fn corpus_load_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CorpusLoadFailed {
            path: path.into(),
            source,
        }
    }
}

// ============================================================================
// Collaborator Errors
// ============================================================================

/// Errors surfaced by the external syntax analyzer boundary.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The analyzer request failed. Retries belong to the caller, not the engine.
    #[error("Syntax analysis failed: {reason}")]
    RequestFailed { reason: String },
}

impl AnalysisError {
    /// Create a RequestFailed error.
    pub fn request_failed(reason: impl Into<String>) -> Self {
        Self::RequestFailed {
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by the external moderation boundary.
#[derive(Error, Debug)]
pub enum ModerationError {
    /// The moderation request failed.
    #[error("Moderation scoring failed: {reason}")]
    RequestFailed { reason: String },
}

impl ModerationError {
    /// Create a RequestFailed error.
    pub fn request_failed(reason: impl Into<String>) -> Self {
        Self::RequestFailed {
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Unified Engine Error
// ============================================================================

/// Unified error type for all engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Moderation(#[from] ModerationError),
}

/// Type alias for Result with EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;

// ============================================================================
// Tests
// ============================================================================
