//! Error handling for the resume matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    /// Input rejected before analysis. Display is the bare message so the
    /// boundary layer can surface it verbatim in a 4xx response body.
    #[error("{0}")]
    Validation(String),

    #[error("Embedding service error: {0}")]
    Embedding(String),

    #[error("Model loading error: {0}")]
    ModelLoading(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Taxonomy error: {0}")]
    Taxonomy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MatcherError {
    /// Whether this error is the caller's fault (maps to a 4xx at the boundary).
    pub fn is_validation(&self) -> bool {
        matches!(self, MatcherError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, MatcherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_bare() {
        let err = MatcherError::Validation("Text must be at least 10 characters long".to_string());
        assert_eq!(err.to_string(), "Text must be at least 10 characters long");
        assert!(err.is_validation());
    }

    #[test]
    fn service_errors_are_not_validation() {
        let err = MatcherError::Embedding("model unavailable".to_string());
        assert!(!err.is_validation());
    }
}
