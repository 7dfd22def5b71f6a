use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};

use fnr_core::{
    Category, CredibilityReport, Error, FlaggedSegment, Label, ModelInfo, Result, TextClassifier,
};
use fnr_extract::Extractor;

lazy_static! {
    static ref URL_PATTERN: Regex = Regex::new(r"https?://\S+|www\.\S+").expect("valid regex");
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("valid regex");
}

/// Token budget per scoring segment, matching the input-length limit of
/// typical sequence classifiers.
pub const MAX_SEGMENT_TOKENS: usize = 512;

/// Confidence above which a negative sentence is flagged.
pub const FLAG_THRESHOLD: f64 = 0.6;

/// Sentences shorter than this (trimmed) carry too little signal to
/// classify meaningfully.
const MIN_SENTENCE_CHARS: usize = 10;

const FLAG_REASON: &str = "Potentially misleading content";

const MODEL_VERSION: &str = "1.0.0";
const MODEL_LAST_UPDATED: &str = "2023-07-25";

/// Scores the credibility of news text. Stateless across calls; every
/// call's segments and results are local to that call, so one analyzer
/// can serve concurrent requests.
pub struct CredibilityAnalyzer {
    classifier: Arc<dyn TextClassifier>,
    extractor: Extractor,
}

impl fmt::Debug for CredibilityAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredibilityAnalyzer")
            .field("classifier", &self.classifier.name())
            .finish()
    }
}

impl CredibilityAnalyzer {
    pub fn new(classifier: Arc<dyn TextClassifier>) -> Result<Self> {
        Ok(Self {
            classifier,
            extractor: Extractor::new()?,
        })
    }

    /// Builds an analyzer around a custom extractor (tests, alternative
    /// strategy chains).
    pub fn with_extractor(classifier: Arc<dyn TextClassifier>, extractor: Extractor) -> Self {
        Self { classifier, extractor }
    }

    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            name: self.classifier.name().to_string(),
            version: MODEL_VERSION.to_string(),
            last_updated: MODEL_LAST_UPDATED.to_string(),
        }
    }

    /// Replaces URL-like substrings with a placeholder token and
    /// collapses whitespace runs.
    pub fn preprocess(&self, text: &str) -> String {
        let text = URL_PATTERN.replace_all(text, "[URL]");
        WHITESPACE.replace_all(&text, " ").trim().to_string()
    }

    /// Splits text into segments whose estimated token count stays
    /// within `max_tokens`. Words are never split or dropped; a single
    /// word whose own estimate exceeds the budget still becomes its own
    /// segment.
    pub fn segment(&self, text: &str, max_tokens: usize) -> Vec<String> {
        let mut segments = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut current_tokens = 0usize;

        for word in text.split_whitespace() {
            let word_tokens = self.classifier.count_tokens(word);
            if current_tokens + word_tokens <= max_tokens || current.is_empty() {
                current.push(word);
                current_tokens += word_tokens;
            } else {
                segments.push(current.join(" "));
                current = vec![word];
                current_tokens = word_tokens;
            }
        }

        if !current.is_empty() {
            segments.push(current.join(" "));
        }
        segments
    }

    /// Scores raw text: classify every segment, average the per-segment
    /// credibility contributions, and flag misleading sentences.
    pub async fn analyze_text(&self, text: &str) -> Result<CredibilityReport> {
        let cleaned = self.preprocess(text);
        let segments = self.segment(&cleaned, MAX_SEGMENT_TOKENS);
        debug!("scoring {} segment(s)", segments.len());

        let mut contributions = Vec::with_capacity(segments.len());
        for segment in &segments {
            let result = self.classifier.classify(segment).await?;
            let credibility = match result.label {
                Label::Positive => result.confidence,
                Label::Negative => 1.0 - result.confidence,
            };
            contributions.push(credibility);
        }

        // Empty input scores neutral rather than failing.
        let score = if contributions.is_empty() {
            0.5
        } else {
            contributions.iter().sum::<f64>() / contributions.len() as f64
        };

        let highlighted_segments = self.flag_misleading(&cleaned).await?;

        Ok(CredibilityReport {
            score,
            category: Category::from_score(score),
            highlighted_segments,
            url: None,
            title: None,
            source_metadata: None,
        })
    }

    /// Classifies each sentence separately and flags confidently
    /// negative ones. Indices refer to the sentence's position among
    /// all sentences, including unflagged and skipped ones.
    async fn flag_misleading(&self, text: &str) -> Result<Vec<FlaggedSegment>> {
        let mut flagged = Vec::new();

        for (index, sentence) in split_sentences(text).iter().enumerate() {
            if sentence.trim().len() < MIN_SENTENCE_CHARS {
                continue;
            }

            let result = self.classifier.classify(sentence).await?;
            if result.label == Label::Negative && result.confidence > FLAG_THRESHOLD {
                flagged.push(FlaggedSegment {
                    text: sentence.clone(),
                    confidence: result.confidence,
                    index,
                    reason: FLAG_REASON.to_string(),
                });
            }
        }

        Ok(flagged)
    }

    /// Extracts an article from a URL and scores `"{title}. {content}"`,
    /// merging the extractor's metadata into the report. Extraction
    /// failures are client-fixable and surface as validation errors.
    pub async fn analyze_url(&self, url: &str) -> Result<CredibilityReport> {
        info!("🔍 Analyzing URL: {}", url);
        let article = self
            .extractor
            .extract(url)
            .await
            .map_err(|e| Error::Validation(format!("Failed to analyze URL: {}", e)))?;

        let composed = format!("{}. {}", article.title, article.content);
        let mut report = self.analyze_text(&composed).await?;
        report.url = Some(article.url);
        report.title = Some(article.title);
        report.source_metadata = Some(article.metadata);
        Ok(report)
    }

    /// Scores a batch of texts sequentially.
    pub async fn analyze_batch(&self, texts: &[String]) -> Result<Vec<CredibilityReport>> {
        let mut reports = Vec::with_capacity(texts.len());
        for text in texts {
            reports.push(self.analyze_text(text).await?);
        }
        Ok(reports)
    }
}

/// Splits text into sentences at boundaries following `.`, `!`, or `?`
/// followed by whitespace. The terminator stays with its sentence.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some((_, next)) = chars.peek() {
                if next.is_whitespace() {
                    let end = i + c.len_utf8();
                    let sentence = text[start..end].trim_start();
                    if !sentence.is_empty() {
                        sentences.push(sentence.to_string());
                    }
                    start = end;
                }
            }
        }
    }

    let tail = text[start..].trim_start();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}
