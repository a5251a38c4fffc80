use thiserror::Error;

use crate::State;

/// Errors that may occur when converting or (de)serializing optional
/// values.
#[derive(Debug, Error)]
pub enum Error {
    /// Zero-length input was given to a format that requires content.
    #[error("empty input for a value that cannot be unset")]
    EmptyInput,

    /// A null representation was read into a flavor that cannot be
    /// null.
    #[error("null is not allowed for a value that cannot be null")]
    NullNotAllowed,

    /// Tagged text or binary input started with an unknown tag.
    #[error("invalid tag byte {0:#04x}")]
    InvalidTagByte(u8),

    /// A value was narrowed into a flavor that cannot hold its state.
    #[error("{state} value cannot be represented as {target}")]
    Unrepresentable { state: State, target: &'static str },

    /// The document codec failed to encode or decode a payload.
    #[error("{0}")]
    Document(Box<dyn std::error::Error + Send + Sync>),

    /// A payload conversion failed.
    #[error("{0}")]
    Value(#[from] tristate_value::Error),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Document(Box::new(value))
    }
}
