use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_responses_path")]
    pub responses_path: PathBuf,

    #[serde(default = "default_patterns_path")]
    pub patterns_path: PathBuf,

    #[serde(default = "default_synonyms_path")]
    pub synonyms_path: PathBuf,

    #[serde(default = "default_sentiment_lexicon_path")]
    pub sentiment_lexicon_path: PathBuf,

    /// Fixed seed for picking responses. Seeded from entropy when absent.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_responses_path() -> PathBuf {
    "resources/responses.json".into()
}

fn default_patterns_path() -> PathBuf {
    "resources/patterns.json".into()
}

fn default_synonyms_path() -> PathBuf {
    "resources/synonyms.json".into()
}

fn default_sentiment_lexicon_path() -> PathBuf {
    "resources/sentiment-lex.json".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            responses_path: default_responses_path(),
            patterns_path: default_patterns_path(),
            synonyms_path: default_synonyms_path(),
            sentiment_lexicon_path: default_sentiment_lexicon_path(),
            rng_seed: None,
        }
    }
}
