use std::sync::Arc;

use fnr_core::{Error, Result, TextClassifier};

pub mod lexicon;
pub mod remote;

pub use lexicon::LexiconClassifier;
pub use remote::RemoteClassifier;

/// Builds a classifier by name. `base_url` is only meaningful for the
/// remote backend.
pub fn create_classifier(name: &str, base_url: Option<&str>) -> Result<Arc<dyn TextClassifier>> {
    match name {
        "lexicon" => Ok(Arc::new(LexiconClassifier::new())),
        "remote" => Ok(Arc::new(RemoteClassifier::new(
            base_url.map(|s| s.to_string()),
        )?)),
        other => Err(Error::Classification(format!(
            "unknown classifier: {} (available: lexicon, remote)",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_known_classifiers() {
        assert_eq!(create_classifier("lexicon", None).unwrap().name(), "lexicon");
        assert_eq!(create_classifier("remote", None).unwrap().name(), "remote");
    }

    #[test]
    fn test_create_unknown_classifier() {
        assert!(create_classifier("bert-large", None).is_err());
    }
}
