use std::collections::HashSet;
use std::fmt;

use async_trait::async_trait;
use lazy_static::lazy_static;

use fnr_core::{Classification, Label, Result, TextClassifier};

lazy_static! {
    static ref POSITIVE_WORDS: HashSet<&'static str> = [
        "good", "great", "positive", "success", "successful", "growth", "improve",
        "improved", "gain", "gains", "rose", "rise", "up", "benefit", "strong",
        "record", "win", "won", "approve", "approved", "confirmed", "progress",
        "recovery", "safe", "stable", "agreement", "support", "breakthrough",
    ]
    .into_iter()
    .collect();
    static ref NEGATIVE_WORDS: HashSet<&'static str> = [
        "bad", "terrible", "negative", "failure", "failed", "crisis", "collapse",
        "loss", "losses", "fell", "fall", "down", "threat", "weak", "fraud",
        "scandal", "fake", "hoax", "lie", "lies", "false", "panic", "disaster",
        "shocking", "outrage", "conspiracy", "secret", "exposed", "denied",
    ]
    .into_iter()
    .collect();
}

/// Word-list sentiment classifier. A deliberately simple stand-in for a
/// purpose-trained model behind the same capability trait; anything
/// production-grade should swap in a real backend.
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LexiconClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexiconClassifier").finish()
    }
}

#[async_trait]
impl TextClassifier for LexiconClassifier {
    fn name(&self) -> &str {
        "lexicon"
    }

    async fn classify(&self, text: &str) -> Result<Classification> {
        let mut positive = 0usize;
        let mut negative = 0usize;

        for word in text.split_whitespace() {
            let word: String = word
                .chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(|c| c.to_lowercase())
                .collect();
            if POSITIVE_WORDS.contains(word.as_str()) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(word.as_str()) {
                negative += 1;
            }
        }

        let total = positive + negative;
        if total == 0 {
            // No sentiment signal at all; neutral-positive.
            return Ok(Classification {
                label: Label::Positive,
                confidence: 0.5,
            });
        }

        let (label, hits) = if negative > positive {
            (Label::Negative, negative)
        } else {
            (Label::Positive, positive)
        };
        let confidence = 0.5 + 0.5 * (hits as f64 / total as f64);

        Ok(Classification {
            label,
            confidence: confidence.min(1.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_positive_text() {
        let classifier = LexiconClassifier::new();
        let result = classifier
            .classify("Markets rose on strong gains and record growth.")
            .await
            .unwrap();
        assert_eq!(result.label, Label::Positive);
        assert!(result.confidence > 0.5);
    }

    #[tokio::test]
    async fn test_negative_text() {
        let classifier = LexiconClassifier::new();
        let result = classifier
            .classify("Shocking scandal exposed as a fraud and a hoax!")
            .await
            .unwrap();
        assert_eq!(result.label, Label::Negative);
        assert!(result.confidence > 0.6);
    }

    #[tokio::test]
    async fn test_neutral_text() {
        let classifier = LexiconClassifier::new();
        let result = classifier
            .classify("The meeting is scheduled for Tuesday afternoon.")
            .await
            .unwrap();
        assert_eq!(result.label, Label::Positive);
        assert_eq!(result.confidence, 0.5);
    }

    #[tokio::test]
    async fn test_punctuation_and_case_ignored() {
        let classifier = LexiconClassifier::new();
        let result = classifier.classify("FRAUD! Scandal.").await.unwrap();
        assert_eq!(result.label, Label::Negative);
        assert_eq!(result.confidence, 1.0);
    }
}
