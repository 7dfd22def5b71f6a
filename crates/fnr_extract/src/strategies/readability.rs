use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};

use crate::{fetch, metadata};
use fnr_core::{ExtractedArticle, Result};

/// Generic readability fallback: fetch the raw page, find the densest
/// text container, and flatten it to plain text. Unlike the article
/// strategy it propagates fetch failures, because there is nothing left
/// to fall back to.
pub struct ReadabilityStrategy;

impl ReadabilityStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReadabilityStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl super::ExtractionStrategy for ReadabilityStrategy {
    fn name(&self) -> &str {
        "readability"
    }

    async fn try_extract(&self, client: &Client, url: &str) -> Result<Option<ExtractedArticle>> {
        let html = fetch::fetch_html(client, url).await?;
        Ok(parse_readable(&html, url))
    }
}

/// Synchronous readability pass. `Html` is not `Send`, so it must never
/// live across an await point.
fn parse_readable(html: &str, url: &str) -> Option<ExtractedArticle> {
    let document = Html::parse_document(html);

    let content = extract_readable_text(&document)?;
    if content.is_empty() {
        return None;
    }

    Some(ExtractedArticle {
        title: extract_title(&document),
        content,
        metadata: metadata::extract_metadata(&document, url),
        url: url.to_string(),
    })
}

fn extract_title(document: &Html) -> String {
    for selector in ["title", "h1"] {
        let Ok(selector) = Selector::parse(selector) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = element.text().collect::<String>();
            let text = text.trim();
            if !text.is_empty() {
                return text.to_string();
            }
        }
    }
    ExtractedArticle::UNKNOWN_TITLE.to_string()
}

/// Picks the candidate container with the most paragraph text and
/// flattens it: tags stripped, text nodes joined with single spaces,
/// trimmed.
fn extract_readable_text(document: &Html) -> Option<String> {
    let candidates = Selector::parse("article, main, section, div").ok()?;
    let body = Selector::parse("body").ok()?;

    let best = document
        .select(&candidates)
        .max_by_key(|el| readability_score(el))
        .filter(|el| readability_score(el) > 0)
        .or_else(|| document.select(&body).next())?;

    let text = best
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let text = normalize_whitespace(&text);

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Paragraph-weighted text mass of a container.
fn readability_score(element: &ElementRef) -> usize {
    let Ok(paragraph) = Selector::parse("p") else {
        return 0;
    };
    element
        .select(&paragraph)
        .map(|p| p.text().map(|t| t.trim().len()).sum::<usize>())
        .sum()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
