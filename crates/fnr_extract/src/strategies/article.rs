use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::warn;

use crate::{fetch, jsonld, source::source_name_from_url};
use fnr_core::{ExtractedArticle, Result, SourceMetadata};

/// Minimum body length for the strategy to accept its own result.
/// Anything shorter is likely a paywall stub or a consent page.
const MIN_CONTENT_CHARS: usize = 100;

/// Minimum paragraph length worth keeping; shorter ones are usually
/// captions, share buttons, or section labels.
const MIN_PARAGRAPH_CHARS: usize = 20;

/// Containers that usually hold the article body, in probe order.
const CONTENT_CONTAINERS: &[&str] = &[
    "article",
    "main",
    ".content, .article, .post, .entry",
    "#content, #article, #post, #entry",
    "body",
];

/// Primary strategy: boilerplate removal tuned for news pages. Pulls
/// the title, the paragraph text of the main content container, the
/// publish date, and the authors. Accepts the result only when both
/// title and a substantial body were found; all of its own failures
/// degrade to a fall-through so the generic strategy gets a turn.
pub struct ArticleStrategy;

impl ArticleStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArticleStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl super::ExtractionStrategy for ArticleStrategy {
    fn name(&self) -> &str {
        "article"
    }

    async fn try_extract(&self, client: &Client, url: &str) -> Result<Option<ExtractedArticle>> {
        let html = match fetch::fetch_html(client, url).await {
            Ok(html) => html,
            Err(e) => {
                // The fallback strategy performs its own fetch and will
                // surface a persistent transport failure itself.
                warn!("article download failed for {}: {}", url, e);
                return Ok(None);
            }
        };

        Ok(parse_article(&html, url))
    }
}

/// Synchronous parse pass. `Html` is not `Send`, so it must never live
/// across an await point.
fn parse_article(html: &str, url: &str) -> Option<ExtractedArticle> {
    let document = Html::parse_document(html);

    let title = extract_title(&document)?;
    let content = extract_body(&document)?;

    if title.is_empty() || content.len() <= MIN_CONTENT_CHARS {
        return None;
    }

    let metadata = SourceMetadata {
        published_date: extract_published_date(&document),
        author: extract_author(&document),
        source: Some(source_name_from_url(url)),
    };

    Some(ExtractedArticle {
        title,
        content,
        metadata,
        url: url.to_string(),
    })
}

fn extract_title(document: &Html) -> Option<String> {
    for selector in ["meta[property=\"og:title\"]", "h1", "title"] {
        let Ok(selector) = Selector::parse(selector) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let title = match element.value().attr("content") {
                Some(content) => content.trim().to_string(),
                None => {
                    let text = element.text().collect::<String>();
                    text.trim().to_string()
                }
            };
            if !title.is_empty() {
                return Some(title);
            }
        }
    }
    None
}

fn extract_body(document: &Html) -> Option<String> {
    let paragraph = Selector::parse("p").ok()?;

    for container in CONTENT_CONTAINERS {
        let Ok(selector) = Selector::parse(container) else {
            continue;
        };
        let Some(element) = document.select(&selector).next() else {
            continue;
        };

        let paragraphs: Vec<String> = element
            .select(&paragraph)
            .map(|p| p.text().collect::<String>().trim().to_string())
            .filter(|text| text.len() > MIN_PARAGRAPH_CHARS)
            .collect();

        let content = normalize_whitespace(&paragraphs.join(" "));
        if content.len() > MIN_CONTENT_CHARS {
            return Some(content);
        }
    }

    None
}

fn extract_published_date(document: &Html) -> Option<String> {
    let meta = Selector::parse("meta[property=\"article:published_time\"]").ok()?;
    let raw = document
        .select(&meta)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| jsonld::extract_date_published(document))?;

    // Timestamps are reduced to a plain date; anything unparseable is
    // passed through as found.
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(date) => Some(date.format("%Y-%m-%d").to_string()),
        Err(_) => Some(raw),
    }
}

fn extract_author(document: &Html) -> Option<String> {
    let authors = jsonld::extract_authors(document);
    if !authors.is_empty() {
        return Some(authors.join(", "));
    }

    let meta = Selector::parse("meta[name=\"author\"]").ok()?;
    document
        .select(&meta)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
