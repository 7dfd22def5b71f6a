use scraper::{Html, Selector};
use serde_json::Value;

/// Extracts author names from JSON-LD blocks embedded in the document.
pub fn extract_authors(document: &Html) -> Vec<String> {
    let mut authors = Vec::new();

    for json in parse_blocks(document) {
        if let Some(author) = json.get("author") {
            collect_author_names(author, &mut authors);
        }
    }

    authors
}

/// Extracts the `datePublished` field from JSON-LD blocks, if any.
pub fn extract_date_published(document: &Html) -> Option<String> {
    for json in parse_blocks(document) {
        if let Some(date) = json.get("datePublished").and_then(|d| d.as_str()) {
            let date = date.trim();
            if !date.is_empty() {
                return Some(date.to_string());
            }
        }
    }
    None
}

fn parse_blocks(document: &Html) -> Vec<Value> {
    let mut blocks = Vec::new();

    if let Ok(selector) = Selector::parse("script[type='application/ld+json']") {
        for script in document.select(&selector) {
            let raw = script.text().collect::<String>();
            if let Ok(json) = serde_json::from_str::<Value>(raw.trim()) {
                // Some sites wrap the article object in an @graph array.
                if let Some(graph) = json.get("@graph").and_then(|g| g.as_array()) {
                    blocks.extend(graph.iter().cloned());
                }
                blocks.push(json);
            }
        }
    }

    blocks
}

fn collect_author_names(author: &Value, authors: &mut Vec<String>) {
    match author {
        Value::Array(arr) => {
            for entry in arr {
                collect_author_names(entry, authors);
            }
        }
        Value::Object(obj) => {
            if let Some(name) = obj.get("name").and_then(|n| n.as_str()) {
                let name = name.trim();
                if !name.is_empty() {
                    authors.push(name.to_string());
                }
            }
        }
        Value::String(s) => {
            let name = s.trim();
            if !name.is_empty() {
                authors.push(name.to_string());
            }
        }
        _ => {}
    }
}
