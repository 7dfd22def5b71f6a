pub mod classifier;
pub mod error;
pub mod types;

pub use classifier::{Classification, Label, TextClassifier};
pub use error::Error;
pub use types::{
    Category, CredibilityReport, ExtractedArticle, FlaggedSegment, ModelInfo, SourceMetadata,
};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use super::classifier::{Classification, Label, TextClassifier};
    pub use super::types::{Category, CredibilityReport, ExtractedArticle, SourceMetadata};
    pub use super::{Error, Result};
}
