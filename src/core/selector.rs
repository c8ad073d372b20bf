//! Word Selection Strategies
//!
//! Populates a sentence's word lists so each part of speech has at least
//! as many entries as the resolved template has placeholders of that type.
//!
//! Two strategies: draw everything fresh from the word bank, or reuse the
//! words of a previously analyzed sentence (topping up from the bank when
//! the template needs more slots, then shuffling so reused words do not
//! always land in their original grammatical position).

use rand::prelude::*;
use tracing::debug;

use super::conjugate::Tense;
use super::errors::GenerationError;
use super::sentence::{PartOfSpeech, Sentence};
use super::vocabulary::WordBank;

/// Strategy deciding which concrete words fill placeholder slots.
#[derive(Debug)]
pub enum WordSelector<'a> {
    /// Draw fresh words from the bank for every slot.
    New,

    /// Reuse the words of a previously analyzed sentence, topping up from
    /// the bank as needed.
    Original { source: &'a Sentence },
}

impl WordSelector<'_> {
    /// Reuse words from an analyzed sentence. Fails when no source
    /// sentence is available.
    pub fn original(source: Option<&Sentence>) -> Result<WordSelector<'_>, GenerationError> {
        let source = source.ok_or_else(|| GenerationError::missing_source("original_words"))?;
        Ok(WordSelector::Original { source })
    }

    /// Ensure the sentence's word lists cover the placeholder counts of its
    /// resolved structure template. Entries are only ever added, never
    /// removed; a part of speech without placeholders draws nothing.
    pub fn populate(
        &self,
        sentence: &mut Sentence,
        bank: &WordBank,
        tense: Tense,
        rng: &mut impl Rng,
    ) -> Result<(), GenerationError> {
        match self {
            Self::New => self.top_up_fresh(sentence, bank, tense, rng)?,
            Self::Original { source } => {
                // Original words first: copied verbs are conjugated before
                // any top-up, and top-up draws stay unconjugated.
                for part in PartOfSpeech::all() {
                    let mut copied = source.words(*part).clone();
                    if *part == PartOfSpeech::Verb && tense == Tense::Future {
                        copied = copied
                            .iter()
                            .map(|verb| tense.conjugate(verb))
                            .collect::<Result<Vec<_>, _>>()?;
                    }
                    sentence.words_mut(*part).extend(copied);
                }

                for part in PartOfSpeech::all() {
                    let needed = sentence.slots(*part);
                    while sentence.words(*part).len() < needed {
                        let word = bank.random_word(*part, rng);
                        sentence.words_mut(*part).push(word);
                    }
                }

                // Decorrelate slot assignment from the source word order.
                for part in PartOfSpeech::all() {
                    sentence.words_mut(*part).shuffle(rng);
                }
            }
        }

        debug!(
            nouns = sentence.nouns.len(),
            verbs = sentence.verbs.len(),
            adjectives = sentence.adjectives.len(),
            "Populated word lists"
        );
        Ok(())
    }

    fn top_up_fresh(
        &self,
        sentence: &mut Sentence,
        bank: &WordBank,
        tense: Tense,
        rng: &mut impl Rng,
    ) -> Result<(), GenerationError> {
        for part in PartOfSpeech::all() {
            let needed = sentence.slots(*part);
            while sentence.words(*part).len() < needed {
                let word = match part {
                    PartOfSpeech::Verb => bank.random_verb(tense, rng)?,
                    _ => bank.random_word(*part, rng),
                };
                sentence.words_mut(*part).push(word);
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
