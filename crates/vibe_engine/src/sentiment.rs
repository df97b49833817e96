use std::collections::HashSet;

use serde::Deserialize;

/// Positive and negative word lists for the lite sentiment check.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SentimentLexicon {
    #[serde(default)]
    positive: HashSet<String>,
    #[serde(default)]
    negative: HashSet<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sentiment {
    /// Positive hits minus negative hits.
    pub score: i32,
    /// `score / 4` clamped to -1..1.
    pub polarity: f64,
    pub positive: usize,
    pub negative: usize,
}

impl SentimentLexicon {
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    pub fn analyze(&self, text: &str) -> Sentiment {
        let clean: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
            .collect();

        let (mut positive, mut negative) = (0, 0);
        for token in clean.split_whitespace() {
            if self.positive.contains(token) {
                positive += 1;
            }
            if self.negative.contains(token) {
                negative += 1;
            }
        }

        let score = positive as i32 - negative as i32;
        Sentiment {
            score,
            polarity: (score as f64 / 4.0).clamp(-1.0, 1.0),
            positive,
            negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> SentimentLexicon {
        SentimentLexicon::new(["great", "love", "awesome"], ["hate", "awful"])
    }

    #[test]
    fn counts_hits_ignoring_punctuation() {
        let sentiment = lexicon().analyze("Great!! I LOVE it, not awful.");
        assert_eq!(sentiment.positive, 2);
        assert_eq!(sentiment.negative, 1);
        assert_eq!(sentiment.score, 1);
        assert_eq!(sentiment.polarity, 0.25);
    }

    #[test]
    fn polarity_is_clamped() {
        let sentiment = lexicon().analyze("great great love awesome awesome");
        assert_eq!(sentiment.score, 5);
        assert_eq!(sentiment.polarity, 1.0);

        let sentiment = lexicon().analyze("hate hate awful awful awful");
        assert_eq!(sentiment.polarity, -1.0);
    }

    #[test]
    fn neutral_text() {
        assert_eq!(lexicon().analyze("sup"), Sentiment::default());
        assert_eq!(SentimentLexicon::default().analyze("love"), Sentiment::default());
    }
}
