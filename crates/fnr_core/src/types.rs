use serde::{Deserialize, Serialize};

/// Readable article pulled out of a web page. Built once per extraction
/// call and handed straight to the analyzer, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedArticle {
    pub title: String,
    pub content: String,
    pub metadata: SourceMetadata,
    pub url: String,
}

impl ExtractedArticle {
    pub const UNKNOWN_TITLE: &'static str = "Unknown Title";
}

/// Publication metadata harvested from page markup. Every field is
/// resolved independently; a probe that finds nothing leaves its field
/// empty rather than failing the extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Credible,
    #[serde(rename = "Somewhat Credible")]
    SomewhatCredible,
    #[serde(rename = "Not Credible")]
    NotCredible,
}

impl Category {
    /// Fixed thresholding bands, inclusive on the lower bound.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            Category::Credible
        } else if score >= 0.4 {
            Category::SomewhatCredible
        } else {
            Category::NotCredible
        }
    }
}

/// A sentence flagged as potentially misleading. `index` is the
/// sentence's ordinal among all sentences of the analyzed text, not
/// just the flagged ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlaggedSegment {
    pub text: String,
    pub confidence: f64,
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredibilityReport {
    pub score: f64,
    pub category: Category,
    pub highlighted_segments: Vec<FlaggedSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_metadata: Option<SourceMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub version: String,
    pub last_updated: String,
}
