use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::orchestrator::GeneratorSettings;
use crate::core::vocabulary::VocabularyPaths;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub vocabulary: VocabularyConfig,
}

/// Generation pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Expand `[sentence]` slots recursively.
    pub recursion_enabled: bool,
    /// Maximum recursion depth for `[sentence]` expansion.
    pub max_recursion_depth: u32,
    /// Conjugate verbs into the future tense by default.
    pub future_tense: bool,
}

/// Word-list and template-corpus file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Structure-template corpus, one template per line.
    pub corpus_path: PathBuf,
    /// Noun list, one word per line.
    pub noun_path: PathBuf,
    /// Verb list, one word per line.
    pub verb_path: PathBuf,
    /// Adjective list, one word per line.
    pub adjective_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            vocabulary: VocabularyConfig::default(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            recursion_enabled: true,
            max_recursion_depth: 3,
            future_tense: false,
        }
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            corpus_path: data_dir.join("templates.txt"),
            noun_path: data_dir.join("nouns.txt"),
            verb_path: data_dir.join("verbs.txt"),
            adjective_path: data_dir.join("adjectives.txt"),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("jabberwock"))
        .unwrap_or_else(|| PathBuf::from("data"))
}

impl AppConfig {
    /// Load configuration from `~/.config/jabberwock/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e} — using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {} — using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Recursion settings for the generation pipeline.
    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            recursion_enabled: self.generator.recursion_enabled,
            max_recursion_depth: self.generator.max_recursion_depth,
        }
    }

    /// The configured vocabulary file locations, for `WordBank::refresh`.
    pub fn vocabulary_paths(&self) -> VocabularyPaths {
        VocabularyPaths {
            noun: self.vocabulary.noun_path.clone(),
            verb: self.vocabulary.verb_path.clone(),
            adjective: self.vocabulary.adjective_path.clone(),
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("jabberwock").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
