use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Classification error: {0}")]
    Classification(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// True when the failure is attributable to caller-supplied input
    /// and should map to a client error at the API boundary.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::InvalidUrl(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
