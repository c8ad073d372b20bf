//! Sentence Assembler
//!
//! Deterministic placeholder substitution and finishing. Placeholder
//! families are processed in a fixed order (nouns, then verbs, then
//! adjectives); within a family the Nth occurrence in reading order
//! consumes the Nth word of the list. Substitution is first-match
//! replacement, one word at a time, never slot-indexed.

use tracing::debug;

use super::sentence::{PartOfSpeech, Sentence};

/// Substitutes placeholders and finalizes capitalization.
#[derive(Debug)]
pub struct SentenceAssembler;

impl SentenceAssembler {
    /// Fill the sentence's template with its word lists and write the
    /// finished text. Words are consumed from the front of each list; a
    /// list that runs short leaves its remaining placeholders literal.
    pub fn assemble(sentence: &mut Sentence) {
        let mut text = sentence.structure_template.clone();

        for part in PartOfSpeech::all() {
            let token = part.token();
            let list = sentence.words_mut(*part);

            let mut used = 0;
            while used < list.len() {
                match text.find(token) {
                    Some(pos) => {
                        text.replace_range(pos..pos + token.len(), &list[used]);
                        used += 1;
                    }
                    None => break,
                }
            }
            list.drain(..used);
        }

        sentence.text = capitalize_first(&text);
        debug!(text = %sentence.text, "Assembled sentence");
    }
}

/// Uppercase the first character; an empty string stays empty.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================
