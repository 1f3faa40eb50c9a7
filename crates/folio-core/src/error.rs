//! Error types for Folio

use thiserror::Error;

/// Main error type for page behavior operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FolioError {
    /// Local preference storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// The form relay could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// The relay answered with a body that is not the expected JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// The relay answered but reported `success: false`
    #[error("Relay rejected submission: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),

    /// Markup a component needs is not on the page
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A browser API call failed
    #[error("DOM error: {0}")]
    Dom(String),

    /// The typewriter was given nothing to type
    #[error("Typewriter needs at least one phrase")]
    EmptyPhrases,

    /// A contact submission is already outstanding
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// Page configuration could not be parsed or is invalid
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Decode(err.to_string())
    }
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
