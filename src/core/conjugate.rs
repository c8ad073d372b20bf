//! Tense Conjugation
//!
//! Pure mapping from a base verb form to a target tense's surface form.
//! Stateless; the active tense is passed explicitly through the pipeline
//! rather than inferred from collaborator state.

use serde::{Deserialize, Serialize};

use super::errors::GenerationError;

/// Target tense for verb conjugation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    /// Identity mapping.
    #[default]
    Present,
    /// Prefixes "will ", with the irregular copula mapped to "will be".
    Future,
}

impl Tense {
    /// Conjugate a base verb form into this tense.
    ///
    /// An empty word is rejected before any mapping is applied.
    pub fn conjugate(&self, word: &str) -> Result<String, GenerationError> {
        if word.is_empty() {
            return Err(GenerationError::EmptyWord);
        }

        match self {
            Self::Present => Ok(word.to_string()),
            Self::Future => match word {
                "is" | "am" | "are" => Ok("will be".to_string()),
                _ => Ok(format!("will {}", word)),
            },
        }
    }

    /// The tense selected by the caller-facing `future_tense` flag.
    pub fn from_future_flag(future_tense: bool) -> Self {
        if future_tense {
            Self::Future
        } else {
            Self::Present
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
