use scraper::{Html, Selector};

use crate::source::source_name_from_url;
use fnr_core::SourceMetadata;

/// How a probe pulls its value out of a matched element.
#[derive(Debug, Clone, Copy)]
enum ProbeMode {
    /// The `content` attribute only (meta tags).
    Content,
    /// The `content` attribute if present, else the element's text.
    ContentOrText,
}

/// One candidate-lookup rule. Rules are evaluated in order per field;
/// the first rule that yields a non-empty value wins.
struct Probe {
    selector: &'static str,
    mode: ProbeMode,
}

const DATE_PROBES: &[Probe] = &[
    Probe { selector: "meta[property=\"article:published_time\"]", mode: ProbeMode::ContentOrText },
    Probe { selector: "meta[itemprop=\"datePublished\"]", mode: ProbeMode::ContentOrText },
    Probe { selector: ".date, .published, .time, .timestamp", mode: ProbeMode::ContentOrText },
];

const AUTHOR_PROBES: &[Probe] = &[
    Probe { selector: "meta[property=\"article:author\"]", mode: ProbeMode::ContentOrText },
    Probe { selector: "meta[name=\"author\"]", mode: ProbeMode::ContentOrText },
    Probe { selector: "meta[itemprop=\"author\"]", mode: ProbeMode::ContentOrText },
    Probe { selector: ".author, .byline", mode: ProbeMode::ContentOrText },
];

const SOURCE_PROBES: &[Probe] = &[
    Probe { selector: "meta[property=\"og:site_name\"]", mode: ProbeMode::Content },
    Probe { selector: "meta[name=\"publisher\"]", mode: ProbeMode::Content },
];

/// Harvests publication metadata from a parsed page. Each field is
/// resolved independently; `source` falls back to the brand name
/// derived from the URL's domain.
pub fn extract_metadata(document: &Html, url: &str) -> SourceMetadata {
    SourceMetadata {
        published_date: probe_first(document, DATE_PROBES),
        author: probe_first(document, AUTHOR_PROBES),
        source: probe_first(document, SOURCE_PROBES).or_else(|| Some(source_name_from_url(url))),
    }
}

fn probe_first(document: &Html, probes: &[Probe]) -> Option<String> {
    for probe in probes {
        let Ok(selector) = Selector::parse(probe.selector) else {
            continue;
        };
        let Some(element) = document.select(&selector).next() else {
            continue;
        };

        if let Some(content) = element.value().attr("content") {
            let content = content.trim();
            if !content.is_empty() {
                return Some(content.to_string());
            }
        }

        if let ProbeMode::ContentOrText = probe.mode {
            let text = element.text().collect::<String>();
            let text = text.trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_meta_preferred() {
        let html = r#"<html><head>
            <meta property="article:published_time" content="2024-01-15T08:00:00Z">
            <meta name="author" content="John Smith">
            <meta property="og:site_name" content="The Daily Example">
        </head><body><span class="date">January 15</span></body></html>"#;
        let document = Html::parse_document(html);
        let metadata = extract_metadata(&document, "https://www.example.com/a");

        assert_eq!(metadata.published_date.as_deref(), Some("2024-01-15T08:00:00Z"));
        assert_eq!(metadata.author.as_deref(), Some("John Smith"));
        assert_eq!(metadata.source.as_deref(), Some("The Daily Example"));
    }

    #[test]
    fn test_class_probe_text_fallback() {
        let html = r#"<html><body>
            <span class="timestamp">March 3, 2024</span>
            <div class="byline">By Ada Lovelace</div>
        </body></html>"#;
        let document = Html::parse_document(html);
        let metadata = extract_metadata(&document, "https://www.example.com/a");

        assert_eq!(metadata.published_date.as_deref(), Some("March 3, 2024"));
        assert_eq!(metadata.author.as_deref(), Some("By Ada Lovelace"));
    }

    #[test]
    fn test_source_falls_back_to_domain_name() {
        let document = Html::parse_document("<html><body><p>hi</p></body></html>");
        let metadata = extract_metadata(&document, "https://www.some-news-site.com/story");
        assert_eq!(metadata.source.as_deref(), Some("Some News Site"));
    }

    #[test]
    fn test_fields_resolve_independently() {
        let html = r#"<html><head>
            <meta name="author" content="Solo Author">
        </head></html>"#;
        let document = Html::parse_document(html);
        let metadata = extract_metadata(&document, "https://news.example.com/x");

        assert!(metadata.published_date.is_none());
        assert_eq!(metadata.author.as_deref(), Some("Solo Author"));
        assert!(metadata.source.is_some());
    }

    #[test]
    fn test_empty_meta_content_skipped() {
        let html = r#"<html><head>
            <meta name="author" content="">
        </head><body><div class="author">Real Byline</div></body></html>"#;
        let document = Html::parse_document(html);
        let metadata = extract_metadata(&document, "https://www.example.com/a");
        assert_eq!(metadata.author.as_deref(), Some("Real Byline"));
    }
}
