pub mod analyzer;
pub mod classifiers;

pub use analyzer::CredibilityAnalyzer;
pub use classifiers::create_classifier;

pub mod prelude {
    pub use super::analyzer::CredibilityAnalyzer;
    pub use super::classifiers::create_classifier;
    pub use fnr_core::{Classification, CredibilityReport, Error, Label, Result, TextClassifier};
}
