//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Fatal, operation-level failures only. Record-level failures (a single
/// malformed post, a user without coordinates) never surface here; they are
/// collected as warnings on the operation outcome instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The input was not an enumerable collection of records
    #[error("Invalid collection: {0}")]
    InvalidCollection(String),

    /// A post collection is unusable as a whole (e.g. a post without a title
    /// when checking title uniqueness)
    #[error("Malformed post collection: {0}")]
    MalformedPostCollection(String),

    /// A coordinate value could not be coerced to decimal degrees
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid collection error
    pub fn invalid_collection(msg: impl Into<String>) -> Self {
        Self::InvalidCollection(msg.into())
    }

    /// Create a malformed post collection error
    pub fn malformed_posts(msg: impl Into<String>) -> Self {
        Self::MalformedPostCollection(msg.into())
    }

    /// Create an invalid coordinate error
    pub fn invalid_coordinate(msg: impl Into<String>) -> Self {
        Self::InvalidCoordinate(msg.into())
    }

    /// Create a fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
