//! Moderation Boundary
//!
//! Optional external moderation of finished text. The generation pipeline
//! never calls this itself; the layer above the orchestrator forwards the
//! finished sentence here and records the returned confidence scores.

use async_trait::async_trait;
use tracing::debug;

use super::errors::ModerationError;
use super::sentence::{ModerationScores, Sentence};

/// External moderation service. Implementations live outside the engine.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModerationClient: Send + Sync {
    /// Score a finished text for toxic content.
    async fn score(&self, text: &str) -> Result<ModerationScores, ModerationError>;
}

/// Score a finished sentence and write the result into it.
pub async fn moderate_sentence(
    client: &dyn ModerationClient,
    sentence: &mut Sentence,
) -> Result<(), ModerationError> {
    let scores = client.score(&sentence.text).await?;
    debug!(max = scores.max_score(), "Moderation scores recorded");
    sentence.moderation_scores = Some(scores);
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
