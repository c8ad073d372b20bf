//! Syntax Analyzer Boundary
//!
//! The engine consumes an external syntax analyzer through its output
//! contract only: a sequence of tokens tagged with a part-of-speech
//! category. This module defines that contract and turns a tagged token
//! stream into the analyzed `Sentence` (template plus word lists) that the
//! "same as analyzed" and "original words" strategies consume.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::AnalysisError;
use super::sentence::{PartOfSpeech, Sentence};

// ============================================================================
// Token Contract
// ============================================================================

/// Part-of-speech category assigned by the external analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    /// Anything the engine does not substitute; kept literal.
    Other,
}

impl PosTag {
    /// The substitutable part of speech for this tag, if any.
    pub fn part(&self) -> Option<PartOfSpeech> {
        match self {
            Self::Noun => Some(PartOfSpeech::Noun),
            Self::Verb => Some(PartOfSpeech::Verb),
            Self::Adjective => Some(PartOfSpeech::Adjective),
            Self::Other => None,
        }
    }
}

/// One analyzed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub text: String,
    pub tag: PosTag,
}

impl TaggedToken {
    /// Create a tagged token.
    pub fn new(text: impl Into<String>, tag: PosTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

// ============================================================================
// Analyzer Trait
// ============================================================================

/// External syntax analyzer. Implementations live outside the engine;
/// retries and timeouts belong to them, not to this boundary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SyntaxAnalyzer: Send + Sync {
    /// Tag the given text as a token stream.
    async fn analyze(&self, text: &str) -> Result<Vec<TaggedToken>, AnalysisError>;
}

/// Analyze text and build the corresponding sentence.
pub async fn analyze_text(
    analyzer: &dyn SyntaxAnalyzer,
    text: &str,
) -> Result<Sentence, AnalysisError> {
    let tokens = analyzer.analyze(text).await?;
    Ok(sentence_from_tokens(text, &tokens))
}

/// Build an analyzed sentence from a tagged token stream: substitutable
/// tags become placeholders in the template and feed the word lists in
/// token order; everything else stays literal.
pub fn sentence_from_tokens(text: &str, tokens: &[TaggedToken]) -> Sentence {
    let mut sentence = Sentence::new();
    sentence.text = text.to_string();

    let mut template_parts = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token.tag.part() {
            Some(part) => {
                template_parts.push(part.token().to_string());
                sentence.words_mut(part).push(token.text.clone());
            }
            None => template_parts.push(token.text.clone()),
        }
    }
    sentence.structure_template = template_parts.join(" ");

    debug!(
        template = %sentence.structure_template,
        tokens = tokens.len(),
        "Built sentence from analyzer tokens"
    );
    sentence
}

// ============================================================================
// Tests
// ============================================================================
