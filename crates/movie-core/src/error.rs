//! Error taxonomy for movie embedding
//!
//! Every failure is reported per invocation. There is no partial success:
//! an embed either resolves completely or surfaces one of these errors in
//! place of the player.

use thiserror::Error;

/// Message shown when a provider URL does not follow the provider's layout
pub const NON_STANDARD_URL: &str =
    "Non-standard URL, don't know how to process it, file a ticket please.";

/// Errors that can occur while expanding a movie reference
#[derive(Debug, Error)]
pub enum Error {
    /// No reference supplied at all
    #[error("URL to a movie at least required.")]
    MissingReference,

    /// Style override cannot be parsed
    #[error("Malformed style: {0}")]
    MalformedStyle(String),

    /// Shorthand grammar violated or URL unparsable
    #[error("Malformed reference: {0}")]
    MalformedReference(String),

    /// Shorthand needs a current ticket or wiki page but none was given
    #[error("Missing context: {0}")]
    MissingContext(String),

    /// Provider matched by hostname but its path convention yielded no id
    #[error("Non-standard URL, don't know how to process it, file a ticket please. ({0})")]
    UnrecognizedVideoUrl(String),

    /// The external resource resolver failed
    #[error("Resource resolution failed: {0}")]
    ResourceResolution(#[from] ResourceError),
}

/// Result type for movie embedding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by the attachment resource resolver
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ResourceError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ResourceError {
    /// Create a resolver error with a message only
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a resolver error wrapping an underlying cause
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The resolver's message
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unrecognized_message_asks_for_report() {
        let err = Error::UnrecognizedVideoUrl("https://www.dailymotion.com/x".to_string());
        let text = err.to_string();
        assert!(text.contains("Non-standard URL"));
        assert!(text.contains("file a ticket"));
        assert!(text.contains("dailymotion"));
    }

    #[test]
    fn test_missing_reference_display() {
        assert_eq!(Error::MissingReference.to_string(), "URL to a movie at least required.");
    }

    #[test]
    fn test_resource_error_propagates_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such attachment");
        let err: Error = ResourceError::with_source("lookup failed", io).into();

        assert!(matches!(err, Error::ResourceResolution(_)));
        let inner = err.source().unwrap();
        assert_eq!(inner.to_string(), "lookup failed");
        assert_eq!(inner.source().unwrap().to_string(), "no such attachment");
    }
}
