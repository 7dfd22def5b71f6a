use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use fnr_core::{Error, ExtractedArticle, Result};

pub mod article;
pub mod readability;

use article::ArticleStrategy;
use readability::ReadabilityStrategy;

/// One method of deriving article title/body/metadata from a raw page.
/// Returning `Ok(None)` means "no usable content here, try the next
/// strategy"; an `Err` aborts the whole chain.
#[async_trait]
pub trait ExtractionStrategy: Send + Sync {
    /// Returns the name of the strategy, for logging
    fn name(&self) -> &str;

    /// Attempts to extract an article from the given URL
    async fn try_extract(&self, client: &Client, url: &str) -> Result<Option<ExtractedArticle>>;
}

/// Turns a URL into an [`ExtractedArticle`] by walking an ordered chain
/// of extraction strategies, first success wins. Holds no per-call
/// state and is safe to share across concurrent requests.
pub struct Extractor {
    client: Client,
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: crate::fetch::build_client()?,
            strategies: vec![
                Box::new(ArticleStrategy::new()),
                Box::new(ReadabilityStrategy::new()),
            ],
        })
    }

    /// Builds an extractor with a custom strategy chain.
    pub fn with_strategies(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Result<Self> {
        Ok(Self {
            client: crate::fetch::build_client()?,
            strategies,
        })
    }

    pub async fn extract(&self, url: &str) -> Result<ExtractedArticle> {
        for strategy in &self.strategies {
            match strategy.try_extract(&self.client, url).await? {
                Some(article) => {
                    debug!("📰 {} extraction succeeded for {}", strategy.name(), url);
                    return Ok(article);
                }
                None => {
                    warn!("{} extraction produced no usable content for {}", strategy.name(), url);
                }
            }
        }
        Err(Error::Extraction(format!(
            "no extraction strategy produced usable content for {}",
            url
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnr_core::SourceMetadata;

    struct EmptyStrategy;
    struct FixedStrategy;
    struct FailingStrategy;

    #[async_trait]
    impl ExtractionStrategy for EmptyStrategy {
        fn name(&self) -> &str {
            "empty"
        }

        async fn try_extract(&self, _client: &Client, _url: &str) -> Result<Option<ExtractedArticle>> {
            Ok(None)
        }
    }

    #[async_trait]
    impl ExtractionStrategy for FixedStrategy {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn try_extract(&self, _client: &Client, url: &str) -> Result<Option<ExtractedArticle>> {
            Ok(Some(ExtractedArticle {
                title: "Fallback Title".to_string(),
                content: "Fallback content body.".to_string(),
                metadata: SourceMetadata::default(),
                url: url.to_string(),
            }))
        }
    }

    #[async_trait]
    impl ExtractionStrategy for FailingStrategy {
        fn name(&self) -> &str {
            "failing"
        }

        async fn try_extract(&self, _client: &Client, _url: &str) -> Result<Option<ExtractedArticle>> {
            Err(Error::Extraction("fetch failed".to_string()))
        }
    }

    #[tokio::test]
    async fn test_falls_through_to_next_strategy() {
        let extractor =
            Extractor::with_strategies(vec![Box::new(EmptyStrategy), Box::new(FixedStrategy)])
                .unwrap();
        let article = extractor.extract("https://example.com/a").await.unwrap();
        assert_eq!(article.title, "Fallback Title");
        assert_eq!(article.url, "https://example.com/a");
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let extractor =
            Extractor::with_strategies(vec![Box::new(FixedStrategy), Box::new(EmptyStrategy)])
                .unwrap();
        let article = extractor.extract("https://example.com/a").await.unwrap();
        assert_eq!(article.title, "Fallback Title");
    }

    #[tokio::test]
    async fn test_exhausted_chain_is_an_error() {
        let extractor = Extractor::with_strategies(vec![Box::new(EmptyStrategy)]).unwrap();
        let result = extractor.extract("https://example.com/a").await;
        assert!(matches!(result, Err(Error::Extraction(_))));
    }

    #[tokio::test]
    async fn test_strategy_error_aborts_chain() {
        let extractor =
            Extractor::with_strategies(vec![Box::new(FailingStrategy), Box::new(FixedStrategy)])
                .unwrap();
        let result = extractor.extract("https://example.com/a").await;
        assert!(result.is_err());
    }
}
