use std::time::Duration;

use reqwest::Client;
use url::Url;

use fnr_core::{Error, Result};

/// Browser-identifying User-Agent; some news sites serve stripped-down
/// or blocked pages to unknown clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Fetch timeout in seconds. Bounds worst-case extraction latency.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Builds the shared HTTP client used by all extraction strategies.
/// Redirects are followed (reqwest default).
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// Performs a GET and returns the response body. Non-2xx statuses,
/// timeouts, and DNS failures all surface as errors.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;

    let response = client.get(parsed).send().await?.error_for_status()?;
    let body = response.text().await?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        let client = build_client().unwrap();
        let result = fetch_html(&client, "not-a-url").await;
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
