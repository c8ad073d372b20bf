//! Pipeline integration tests
//!
//! Full generation runs over real files: word lists and a template corpus
//! written to a temp directory, loaded through the same paths the
//! application uses, then driven through every strategy combination.

use std::path::PathBuf;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use crate::core::analysis::{analyze_text, PosTag, SyntaxAnalyzer, TaggedToken};
use crate::core::errors::{AnalysisError, ModerationError};
use crate::core::moderation::{moderate_sentence, ModerationClient};
use crate::core::orchestrator::{GenerationRequest, GeneratorSettings, Orchestrator, StructureKind};
use crate::core::sentence::{ModerationScores, PartOfSpeech, SENTENCE_TOKEN};
use crate::core::structure::TemplateCorpus;
use crate::core::vocabulary::{VocabularyPaths, WordBank};

// ============================================================================
// Fixtures
// ============================================================================

struct Fixture {
    _dir: TempDir,
    corpus_path: PathBuf,
    paths: VocabularyPaths,
}

fn write_fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let write = |name: &str, content: &str| -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    };

    let corpus_path = write(
        "templates.txt",
        "[noun] [verb] [noun]\nthe [adjective] [noun] [verb]\n[sentence] while [sentence]\n",
    );
    let paths = VocabularyPaths {
        noun: write("nouns.txt", "cat\nmoon\nriver\n"),
        verb: write("verbs.txt", "jumps\nis\nsings\n"),
        adjective: write("adjectives.txt", "playful\nsilent\n"),
    };

    Fixture {
        _dir: dir,
        corpus_path,
        paths,
    }
}

fn orchestrator_over(fixture: &Fixture) -> Orchestrator {
    let corpus = TemplateCorpus::from_path(&fixture.corpus_path).unwrap();
    let bank = WordBank::load(&fixture.paths).unwrap();
    Orchestrator::new(corpus, bank, GeneratorSettings::default())
}

/// Canned analyzer standing in for the external NLP service.
struct CannedAnalyzer;

#[async_trait]
impl SyntaxAnalyzer for CannedAnalyzer {
    async fn analyze(&self, _text: &str) -> Result<Vec<TaggedToken>, AnalysisError> {
        Ok(vec![
            TaggedToken::new("the", PosTag::Other),
            TaggedToken::new("playful", PosTag::Adjective),
            TaggedToken::new("cat", PosTag::Noun),
            TaggedToken::new("jumps", PosTag::Verb),
            TaggedToken::new("over", PosTag::Other),
            TaggedToken::new("the", PosTag::Other),
            TaggedToken::new("moon", PosTag::Noun),
        ])
    }
}

/// Canned moderation service with fixed scores.
struct CannedModeration;

#[async_trait]
impl ModerationClient for CannedModeration {
    async fn score(&self, _text: &str) -> Result<ModerationScores, ModerationError> {
        Ok(ModerationScores {
            toxicity: 0.02,
            ..ModerationScores::default()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_random_structure_with_new_words_from_files() {
    let fixture = write_fixture();
    let orchestrator = orchestrator_over(&fixture);
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let sentence = orchestrator
            .generate_with_rng(&GenerationRequest::default(), None, &mut rng)
            .unwrap();

        assert!(!sentence.text.is_empty());
        assert!(!sentence.structure_template.contains(SENTENCE_TOKEN));
        for part in PartOfSpeech::all() {
            assert!(!sentence.text.contains(part.token()));
        }
        let first = sentence.text.chars().next().unwrap();
        assert!(!first.is_lowercase());
    }
}

#[test]
fn test_selected_structure_with_new_words() {
    let fixture = write_fixture();
    let orchestrator = orchestrator_over(&fixture);
    let request = GenerationRequest {
        structure: StructureKind::Selected,
        template: Some("[noun] quietly [verb]".to_string()),
        ..GenerationRequest::default()
    };
    let mut rng = StdRng::seed_from_u64(42);

    let sentence = orchestrator
        .generate_with_rng(&request, None, &mut rng)
        .unwrap();

    assert_eq!(sentence.structure_template, "[noun] quietly [verb]");
    assert!(sentence.text.contains("quietly"));
}

#[tokio::test]
async fn test_analyze_then_reuse_structure_and_words() {
    let fixture = write_fixture();
    let orchestrator = orchestrator_over(&fixture);

    let analyzed = analyze_text(&CannedAnalyzer, "the playful cat jumps over the moon")
        .await
        .unwrap();
    assert_eq!(
        analyzed.structure_template,
        "the [adjective] [noun] [verb] over the [noun]"
    );

    let request = GenerationRequest {
        structure: StructureKind::SameAsAnalyzed,
        use_new_words: false,
        ..GenerationRequest::default()
    };
    let mut rng = StdRng::seed_from_u64(42);
    let sentence = orchestrator
        .generate_with_rng(&request, Some(&analyzed), &mut rng)
        .unwrap();

    // Same structure, original words reshuffled into its slots.
    assert!(sentence.text.starts_with("The "));
    assert!(sentence.text.contains("playful"));
    for word in ["cat", "moon"] {
        assert!(
            sentence.text.contains(word),
            "original noun '{}' missing from '{}'",
            word,
            sentence.text
        );
    }
}

#[tokio::test]
async fn test_future_tense_reuses_and_retenses_original_verbs() {
    let fixture = write_fixture();
    let orchestrator = orchestrator_over(&fixture);

    let analyzed = analyze_text(&CannedAnalyzer, "the playful cat jumps over the moon")
        .await
        .unwrap();
    let request = GenerationRequest {
        structure: StructureKind::SameAsAnalyzed,
        future_tense: true,
        use_new_words: false,
        ..GenerationRequest::default()
    };
    let mut rng = StdRng::seed_from_u64(42);
    let sentence = orchestrator
        .generate_with_rng(&request, Some(&analyzed), &mut rng)
        .unwrap();

    assert!(
        sentence.text.contains("will jumps"),
        "re-tensed verb missing from '{}'",
        sentence.text
    );
}

#[test]
fn test_recursive_corpus_template_is_bounded() {
    let fixture = write_fixture();
    let corpus = TemplateCorpus::from_path(&fixture.corpus_path).unwrap();
    let bank = WordBank::load(&fixture.paths).unwrap();
    let orchestrator = Orchestrator::new(
        corpus,
        bank,
        GeneratorSettings {
            recursion_enabled: true,
            max_recursion_depth: 2,
        },
    );
    let request = GenerationRequest {
        structure: StructureKind::Selected,
        template: Some("[sentence] while [sentence]".to_string()),
        ..GenerationRequest::default()
    };
    let mut rng = StdRng::seed_from_u64(42);

    let sentence = orchestrator
        .generate_with_rng(&request, None, &mut rng)
        .unwrap();
    assert!(!sentence.structure_template.contains(SENTENCE_TOKEN));
    assert!(sentence.text.contains("while"));
}

#[tokio::test]
async fn test_generation_then_moderation_layer() {
    let fixture = write_fixture();
    let orchestrator = orchestrator_over(&fixture);
    let mut rng = StdRng::seed_from_u64(42);

    let mut sentence = orchestrator
        .generate_with_rng(&GenerationRequest::default(), None, &mut rng)
        .unwrap();
    assert!(sentence.moderation_scores.is_none());

    moderate_sentence(&CannedModeration, &mut sentence)
        .await
        .unwrap();
    let scores = sentence.moderation_scores.expect("scores recorded");
    assert!(scores.toxicity > 0.0);
    assert!(!scores.flags_at(0.5));
}

#[test]
fn test_same_seed_same_sentence() {
    let fixture = write_fixture();
    let orchestrator = orchestrator_over(&fixture);
    let request = GenerationRequest::default();

    let mut rng1 = StdRng::seed_from_u64(1234);
    let mut rng2 = StdRng::seed_from_u64(1234);
    let first = orchestrator
        .generate_with_rng(&request, None, &mut rng1)
        .unwrap();
    let second = orchestrator
        .generate_with_rng(&request, None, &mut rng2)
        .unwrap();

    assert_eq!(first.text, second.text);
}

#[test]
fn test_vocabulary_refresh_switches_word_pool() {
    let fixture = write_fixture();
    let mut orchestrator = orchestrator_over(&fixture);

    // Repoint nouns at a disjoint list and refresh the bank.
    let new_nouns = fixture._dir.path().join("nouns_v2.txt");
    std::fs::write(&new_nouns, "asteroid\n").unwrap();
    let updated = VocabularyPaths {
        noun: new_nouns,
        ..fixture.paths.clone()
    };
    orchestrator.bank_mut().refresh(&updated).unwrap();

    let request = GenerationRequest {
        structure: StructureKind::Selected,
        template: Some("[noun]".to_string()),
        ..GenerationRequest::default()
    };
    let mut rng = StdRng::seed_from_u64(42);
    let sentence = orchestrator
        .generate_with_rng(&request, None, &mut rng)
        .unwrap();
    assert_eq!(sentence.text, "Asteroid");
}
