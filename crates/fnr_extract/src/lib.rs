pub mod fetch;
pub mod jsonld;
pub mod metadata;
pub mod source;
pub mod strategies;

pub use strategies::{ExtractionStrategy, Extractor};

pub mod prelude {
    pub use super::strategies::{ExtractionStrategy, Extractor};
    pub use fnr_core::{Error, ExtractedArticle, Result, SourceMetadata};
}
