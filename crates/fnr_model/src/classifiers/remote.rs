use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use fnr_core::{Classification, Error, Label, Result, TextClassifier};

const DEFAULT_BASE_URL: &str = "http://localhost:8001";

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ClassifyResponse {
    label: String,
    confidence: f64,
}

/// Client for an external inference service exposing
/// `POST {base}/classify` with `{"text": ...}` and returning
/// `{"label": "positive" | "negative", "confidence": 0.0..1.0}`.
pub struct RemoteClassifier {
    client: Arc<Client>,
    base_url: String,
}

impl RemoteClassifier {
    pub fn new(base_url: Option<String>) -> Result<Self> {
        Ok(Self {
            client: Arc::new(Client::new()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

impl fmt::Debug for RemoteClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteClassifier")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl TextClassifier for RemoteClassifier {
    fn name(&self) -> &str {
        "remote"
    }

    async fn classify(&self, text: &str) -> Result<Classification> {
        let response = self
            .client
            .post(format!("{}/classify", self.base_url))
            .json(&ClassifyRequest { text })
            .send()
            .await?
            .error_for_status()?
            .json::<ClassifyResponse>()
            .await?;

        let label = match response.label.to_lowercase().as_str() {
            "positive" => Label::Positive,
            "negative" => Label::Negative,
            other => {
                return Err(Error::Classification(format!(
                    "inference service returned unknown label: {}",
                    other
                )))
            }
        };

        Ok(Classification {
            label,
            confidence: response.confidence.clamp(0.0, 1.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_local_service() {
        let classifier = RemoteClassifier::new(None).unwrap();
        assert_eq!(classifier.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_debug_hides_client() {
        let classifier = RemoteClassifier::new(Some("http://inference:9000".to_string())).unwrap();
        let debug = format!("{:?}", classifier);
        assert!(debug.contains("http://inference:9000"));
        assert!(debug.contains("<reqwest::Client>"));
    }
}
