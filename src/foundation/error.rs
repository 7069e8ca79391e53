/// Convenience result type used across sigpaste.
pub type SigpasteResult<T> = Result<T, SigpasteError>;

/// Top-level error taxonomy used by the stamping pipeline and its request boundary.
#[derive(thiserror::Error, Debug)]
pub enum SigpasteError {
    /// Input bytes could not be decoded as an image, or their transport framing is malformed.
    #[error("decode error: {0}")]
    Decode(String),

    /// The composited image could not be serialized to the output format.
    #[error("encode error: {0}")]
    Encode(String),

    /// Missing or out-of-range request fields, oversize payloads, bad settings.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SigpasteError {
    /// Build a [`SigpasteError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`SigpasteError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SigpasteError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
