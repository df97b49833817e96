use itertools::Itertools;
use log::debug;
use vcc_model::Mood;

use crate::{Sentiment, SentimentLexicon, VibeEngine, NO_VIBE};

pub const UNMATCHED_CONFIDENCE: u8 = 15;

// Weights of the confidence blend. They add up to 1.
const ENGINE_WEIGHT: f64 = 0.7;
const SENTIMENT_WEIGHT: f64 = 0.2;
const PRIORITY_WEIGHT: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Input after trimming and collapsing whitespace.
    pub input: String,
    /// `None` when nothing matched.
    pub category: Option<Mood>,
    pub response: String,
    /// 0..=100
    pub confidence: u8,
    pub engine_score: f64,
    pub sentiment: Sentiment,
}

impl Detection {
    pub fn matched(&self) -> bool {
        self.category.is_some()
    }
}

/// Pattern match, then sentiment check, then confidence.
#[derive(Debug, Clone, Default)]
pub struct VibePipeline {
    engine: VibeEngine,
    lexicon: SentimentLexicon,
}

impl VibePipeline {
    pub fn new(engine: VibeEngine, lexicon: SentimentLexicon) -> Self {
        Self { engine, lexicon }
    }

    pub fn engine(&self) -> &VibeEngine {
        &self.engine
    }

    pub fn run(&self, raw: &str) -> Detection {
        let input = raw.split_whitespace().join(" ");
        let text = VibeEngine::preprocess(&input);

        let Some((pattern, engine_score)) = self.engine.best_match(&text) else {
            debug!("vibe check: {input:?} matched nothing");
            return Detection {
                input,
                category: None,
                response: NO_VIBE.to_owned(),
                confidence: UNMATCHED_CONFIDENCE,
                engine_score: 0.0,
                sentiment: Sentiment::default(),
            };
        };

        let sentiment = self.lexicon.analyze(&input);
        let mut confidence = compute_confidence(engine_score, sentiment.polarity, pattern.priority);

        // Sentiment contradicting the category lowers confidence.
        let category = pattern.category.as_str();
        if matches!(category, "sad" | "angry") && sentiment.polarity > 0.5 {
            confidence = scale(confidence, 0.55);
        }
        if category == "hype" && sentiment.polarity < -0.4 {
            confidence = scale(confidence, 0.6);
        }

        debug!(
            "vibe check: {input:?} -> {category} (confidence: {confidence}, score: {engine_score:.2}, polarity: {:.2})",
            sentiment.polarity
        );

        Detection {
            input,
            category: Some(pattern.category.clone()),
            response: pattern.response.clone(),
            confidence,
            engine_score,
            sentiment,
        }
    }
}

/// Blends engine score, sentiment polarity and category priority into 0..=100.
pub fn compute_confidence(engine_score: f64, polarity: f64, priority: f64) -> u8 {
    let normalized_engine = (engine_score / 4.0).tanh();
    let raw = ENGINE_WEIGHT * normalized_engine
        + SENTIMENT_WEIGHT * polarity
        + PRIORITY_WEIGHT * (priority / 2.0);
    (((raw + 1.0) / 2.0) * 100.0).round().clamp(0.0, 100.0) as u8
}

fn scale(confidence: u8, factor: f64) -> u8 {
    (confidence as f64 * factor).round() as u8
}
