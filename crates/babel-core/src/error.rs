use thiserror::Error;

/// Top-level error type for Babel.
#[derive(Debug, Error)]
pub enum BabelError {
    /// Error from a messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Error from the translation backend.
    #[error("translation error: {0}")]
    Translation(#[from] TranslateError),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure modes of a single translation call. None of them are retried.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The request could not be serialized or built.
    #[error("failed to build request: {0}")]
    Encode(String),

    /// DNS, connect, or timeout failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with something other than 200.
    #[error("unexpected status code: {status}")]
    Status { status: u16, body: String },

    /// The body did not have the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The response was well-formed but carried zero choices.
    #[error("no translation returned")]
    NoChoices,
}

impl TranslateError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
