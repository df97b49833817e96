use std::collections::HashMap;

use itertools::Itertools;
use serde::Deserialize;
use vcc_model::Mood;

mod pipeline;
mod sentiment;

pub use pipeline::{compute_confidence, Detection, VibePipeline, UNMATCHED_CONFIDENCE};
pub use sentiment::{Sentiment, SentimentLexicon};

pub const NO_VIBE: &str = "No detectable vibe signature.";

const NEGATORS: [&str; 4] = ["not", "no", "never", "nah"];
const MULTI_WORD_TRIGGER_SCORE: f64 = 3.0;
const SINGLE_WORD_TRIGGER_SCORE: f64 = 1.5;
// Applied to "angry" patterns when the phrase is negated. "sad" ones drop to zero.
const NEGATED_ANGER_FACTOR: f64 = 0.3;

/// Token -> replacement token, applied after stemming.
pub type Synonyms = HashMap<String, String>;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Pattern {
    pub category: Mood,
    pub triggers: Vec<String>,
    pub response: String,
    #[serde(default = "default_priority")]
    pub priority: f64,
}

fn default_priority() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub value: f64,
    pub triggered: bool,
}

#[derive(Debug, Clone, Default)]
pub struct VibeEngine {
    patterns: Vec<Pattern>,
    synonyms: Synonyms,
}

impl VibeEngine {
    pub fn new(patterns: Vec<Pattern>, synonyms: Synonyms) -> Self {
        Self { patterns, synonyms }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Lowercase, trim and collapse whitespace runs to single spaces.
    pub fn preprocess(text: &str) -> String {
        text.to_lowercase().split_whitespace().join(" ")
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(' ')
            .map(stem)
            .map(|token| self.map_synonym(token).to_owned())
            .collect()
    }

    fn map_synonym<'a>(&'a self, token: &'a str) -> &'a str {
        self.synonyms.get(token).map(String::as_str).unwrap_or(token)
    }

    /// Scores a single pattern against preprocessed text.
    pub fn score_match(&self, text: &str, pattern: &Pattern) -> Score {
        let tokens = self.tokenize(text);
        let mut value = 0.0;
        let mut triggered = false;

        for trigger in &pattern.triggers {
            let trigger = trigger.to_lowercase();
            if trigger.contains(' ') {
                if text.contains(&trigger) {
                    value += MULTI_WORD_TRIGGER_SCORE;
                    triggered = true;
                }
            } else if tokens.iter().any(|t| t == stem(&trigger)) {
                value += SINGLE_WORD_TRIGGER_SCORE;
                triggered = true;
            }
        }

        value *= pattern.priority;

        if is_negated(&tokens) {
            match pattern.category.as_str() {
                "sad" => value = 0.0,
                "angry" => value *= NEGATED_ANGER_FACTOR,
                _ => {}
            }
        }

        Score { value, triggered }
    }

    /// Best triggered pattern with a positive score. Ties keep the earlier pattern.
    pub fn best_match(&self, text: &str) -> Option<(&Pattern, f64)> {
        let mut best: Option<(&Pattern, f64)> = None;
        for pattern in &self.patterns {
            let score = self.score_match(text, pattern);
            let best_value = best.map(|(_, v)| v).unwrap_or(0.0);
            if score.triggered && score.value > best_value {
                best = Some((pattern, score.value));
            }
        }
        best
    }

    /// Response of the best matching pattern for raw input.
    pub fn analyze(&self, input: &str) -> &str {
        let text = Self::preprocess(input);
        self.best_match(&text)
            .map(|(pattern, _)| pattern.response.as_str())
            .unwrap_or(NO_VIBE)
    }
}

/// Strips one of `ing`, `ed`, `s` from the end, then a trailing `ly`.
pub fn stem(word: &str) -> &str {
    let word = ["ing", "ed", "s"]
        .iter()
        .find_map(|suffix| word.strip_suffix(suffix))
        .unwrap_or(word);
    word.strip_suffix("ly").unwrap_or(word)
}

fn is_negated(tokens: &[String]) -> bool {
    tokens.iter().any(|t| NEGATORS.contains(&t.as_str()))
}

#[cfg(test)]
pub(crate) mod test_patterns {
    use super::*;

    pub fn patterns() -> Vec<Pattern> {
        vec![
            Pattern {
                category: Mood::from("sad"),
                triggers: vec!["sad".into(), "crying".into(), "feeling down".into()],
                response: "Sending virtual hugs".into(),
                priority: 1.0,
            },
            Pattern {
                category: Mood::from("angry"),
                triggers: vec!["furious".into(), "annoying".into(), "mad".into()],
                response: "Deep breaths, king".into(),
                priority: 1.2,
            },
            Pattern {
                category: Mood::from("hype"),
                triggers: vec!["lets go".into(), "hyped".into()],
                response: "LETS GOOOO".into(),
                priority: 1.5,
            },
        ]
    }

    pub fn synonyms() -> Synonyms {
        Synonyms::from([("upset".to_string(), "sad".to_string())])
    }

    pub fn engine() -> VibeEngine {
        VibeEngine::new(patterns(), synonyms())
    }
}
