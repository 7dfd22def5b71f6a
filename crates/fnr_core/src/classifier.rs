use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub label: Label,
    pub confidence: f64,
}

/// Capability boundary for the backing text-classification model. Any
/// model or remote inference service that can label a string with a
/// confidence in [0, 1] satisfies it.
#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// Returns the name of the backing model
    fn name(&self) -> &str;

    /// Classify a piece of text as positive or negative
    async fn classify(&self, text: &str) -> Result<Classification>;

    /// Estimated token count for a single word. Implementations backed
    /// by a real tokenizer should override this; the default is a rough
    /// subword estimate.
    fn count_tokens(&self, word: &str) -> usize {
        let len = word.trim().len();
        if len == 0 {
            0
        } else {
            len.div_ceil(4)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopClassifier;

    #[async_trait]
    impl TextClassifier for NoopClassifier {
        fn name(&self) -> &str {
            "noop"
        }

        async fn classify(&self, _text: &str) -> Result<Classification> {
            Ok(Classification {
                label: Label::Positive,
                confidence: 1.0,
            })
        }
    }

    #[tokio::test]
    async fn test_classify_contract() {
        let c = NoopClassifier;
        let result = c.classify("anything").await.unwrap();
        assert_eq!(result.label, Label::Positive);
        assert!((0.0..=1.0).contains(&result.confidence));
    }

    #[test]
    fn test_default_token_estimate() {
        let c = NoopClassifier;
        assert_eq!(c.count_tokens(""), 0);
        assert_eq!(c.count_tokens("a"), 1);
        assert_eq!(c.count_tokens("word"), 1);
        assert_eq!(c.count_tokens("markets"), 2);
        assert_eq!(c.count_tokens("incomprehensible"), 4);
    }

    #[test]
    fn test_label_serialization() {
        assert_eq!(serde_json::to_string(&Label::Positive).unwrap(), "\"positive\"");
        let label: Label = serde_json::from_str("\"negative\"").unwrap();
        assert_eq!(label, Label::Negative);
    }
}
