//! Vocabulary Providers
//!
//! Per part-of-speech word sources backing the word-selection strategies.
//! Each provider holds a word list loaded from a text source (one word per
//! line, blank lines ignored) and serves uniform random draws.
//!
//! Reloads replace the backing list wholesale behind an `Arc` swap, so a
//! draw racing a reload sees either the old list or the new list in full,
//! never a partially updated one. Providers are explicit, injected
//! instances passed through the pipeline; nothing here is process-global.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use rand::prelude::*;
use tracing::{debug, info};

use super::conjugate::Tense;
use super::errors::{GenerationError, VocabularyError};
use super::sentence::PartOfSpeech;

/// Sentinel returned by a draw on an empty word list.
pub const EMPTY_DRAW: &str = "undefined";

// ============================================================================
// Vocabulary Provider
// ============================================================================

/// A word source for one part of speech.
pub struct VocabularyProvider {
    part: PartOfSpeech,
    words: RwLock<Arc<Vec<String>>>,
}

impl VocabularyProvider {
    /// Create an empty provider.
    pub fn new(part: PartOfSpeech) -> Self {
        Self {
            part,
            words: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Create a provider backed by an in-memory word list.
    pub fn with_words(part: PartOfSpeech, words: Vec<String>) -> Self {
        Self {
            part,
            words: RwLock::new(Arc::new(words)),
        }
    }

    /// Load a provider from a word file, one word per line.
    pub fn from_path(part: PartOfSpeech, path: &Path) -> Result<Self, VocabularyError> {
        let provider = Self::new(part);
        provider.reload_from_path(path)?;
        Ok(provider)
    }

    /// The part of speech this provider serves.
    pub fn part(&self) -> PartOfSpeech {
        self.part
    }

    /// Replace the backing word list. Atomic with respect to in-flight draws.
    pub fn reload(&self, words: Vec<String>) {
        let count = words.len();
        *self.words.write().unwrap() = Arc::new(words);
        debug!(part = %self.part, count, "Reloaded vocabulary");
    }

    /// Reload the backing word list from a file.
    pub fn reload_from_path(&self, path: &Path) -> Result<(), VocabularyError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| VocabularyError::load_failed(self.part, path, e))?;
        let words = parse_word_lines(&content);
        info!(part = %self.part, path = %path.display(), count = words.len(), "Loaded vocabulary file");
        self.reload(words);
        Ok(())
    }

    /// Draw a uniformly random word, or the `"undefined"` sentinel when the
    /// list is empty.
    pub fn random_word(&self, rng: &mut impl Rng) -> String {
        // Clone the Arc under the read lock, draw outside it.
        let words = self.words.read().unwrap().clone();
        words
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| EMPTY_DRAW.to_string())
    }

    /// Snapshot of the current word list.
    pub fn snapshot(&self) -> Arc<Vec<String>> {
        self.words.read().unwrap().clone()
    }

    /// Number of words currently loaded.
    pub fn len(&self) -> usize {
        self.words.read().unwrap().len()
    }

    /// Whether the word list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for VocabularyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VocabularyProvider")
            .field("part", &self.part)
            .field("words", &self.len())
            .finish()
    }
}

/// Parse a word file's content: one word per line, trimmed, blanks ignored.
fn parse_word_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Word Bank
// ============================================================================

/// File locations for the three vocabulary lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyPaths {
    pub noun: PathBuf,
    pub verb: PathBuf,
    pub adjective: PathBuf,
}

impl VocabularyPaths {
    fn path_for(&self, part: PartOfSpeech) -> &Path {
        match part {
            PartOfSpeech::Noun => &self.noun,
            PartOfSpeech::Verb => &self.verb,
            PartOfSpeech::Adjective => &self.adjective,
        }
    }
}

/// The set of three providers the pipeline draws from.
#[derive(Debug)]
pub struct WordBank {
    nouns: VocabularyProvider,
    verbs: VocabularyProvider,
    adjectives: VocabularyProvider,
    loaded_from: HashMap<PartOfSpeech, PathBuf>,
}

impl WordBank {
    /// Create a bank with empty providers.
    pub fn empty() -> Self {
        Self {
            nouns: VocabularyProvider::new(PartOfSpeech::Noun),
            verbs: VocabularyProvider::new(PartOfSpeech::Verb),
            adjectives: VocabularyProvider::new(PartOfSpeech::Adjective),
            loaded_from: HashMap::new(),
        }
    }

    /// Create a bank from in-memory word lists.
    pub fn with_words(nouns: Vec<String>, verbs: Vec<String>, adjectives: Vec<String>) -> Self {
        Self {
            nouns: VocabularyProvider::with_words(PartOfSpeech::Noun, nouns),
            verbs: VocabularyProvider::with_words(PartOfSpeech::Verb, verbs),
            adjectives: VocabularyProvider::with_words(PartOfSpeech::Adjective, adjectives),
            loaded_from: HashMap::new(),
        }
    }

    /// Load all three providers from their configured files.
    pub fn load(paths: &VocabularyPaths) -> Result<Self, VocabularyError> {
        let mut bank = Self::empty();
        bank.refresh(paths)?;
        Ok(bank)
    }

    /// The provider for a part of speech.
    pub fn provider(&self, part: PartOfSpeech) -> &VocabularyProvider {
        match part {
            PartOfSpeech::Noun => &self.nouns,
            PartOfSpeech::Verb => &self.verbs,
            PartOfSpeech::Adjective => &self.adjectives,
        }
    }

    /// Draw a raw word for a part of speech.
    pub fn random_word(&self, part: PartOfSpeech, rng: &mut impl Rng) -> String {
        self.provider(part).random_word(rng)
    }

    /// Draw a verb and conjugate it into the given tense.
    pub fn random_verb(&self, tense: Tense, rng: &mut impl Rng) -> Result<String, GenerationError> {
        let word = self.verbs.random_word(rng);
        tense.conjugate(&word)
    }

    /// Reload providers whose configured file location changed since the
    /// last load. Replaces the original observer wiring: callers re-apply
    /// the current configuration and only stale providers touch the disk.
    pub fn refresh(&mut self, paths: &VocabularyPaths) -> Result<(), VocabularyError> {
        for part in [
            PartOfSpeech::Noun,
            PartOfSpeech::Verb,
            PartOfSpeech::Adjective,
        ] {
            let path = paths.path_for(part);
            if self.loaded_from.get(&part).map(PathBuf::as_path) == Some(path) {
                continue;
            }
            self.provider(part).reload_from_path(path)?;
            self.loaded_from.insert(part, path.to_path_buf());
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
