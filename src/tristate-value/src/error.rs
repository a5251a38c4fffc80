use std::{num, str};

use thiserror::Error;

/// Errors that may occur when converting payloads.
#[derive(Debug, Error)]
pub enum Error {
    /// The payload type has no custom storage value, no encoding
    /// capability and no recognized structural shape.
    #[error("unsupported storage type '{0}'")]
    UnsupportedStorageType(&'static str),

    /// An unsigned integer is too large for a signed 64-bit primitive.
    #[error("unsigned value {0} overflows a signed 64-bit integer")]
    IntegerOverflow(u64),

    /// A custom storage value capability has no primitive for the
    /// value it was asked to convert.
    ///
    /// [`Encode::storage_value`](crate::Encode::storage_value)
    /// implementations return this to refuse a value.
    #[error("custom storage value of '{0}' is not representable")]
    UnrepresentableCustomValue(&'static str),

    /// No text capability or structural conversion applies to the type.
    #[error("cannot encode '{0}' as text")]
    UnsupportedTextEncoding(&'static str),

    /// No binary capability or structural conversion applies to the type.
    #[error("cannot encode '{0}' as binary")]
    UnsupportedBinaryEncoding(&'static str),

    /// No text capability or structural conversion produces the type.
    #[error("cannot decode '{0}' from text")]
    UnsupportedTextDecoding(&'static str),

    /// No binary capability or structural conversion produces the type.
    #[error("cannot decode '{0}' from binary")]
    UnsupportedBinaryDecoding(&'static str),

    /// A storage primitive cannot be assigned to the requested type.
    #[error("cannot assign {from} primitive to '{to}'")]
    UnsupportedAssign {
        from: &'static str,
        to: &'static str,
    },

    /// A storage primitive does not fit into a narrower target type.
    #[error("value {value} out of range for '{to}'")]
    OutOfRange { value: String, to: &'static str },

    /// Text input was not valid UTF-8.
    #[error("{0}")]
    Utf8(#[from] str::Utf8Error),

    /// Failed to parse an integer from text.
    #[error("{0}")]
    ParseInt(#[from] num::ParseIntError),

    /// Failed to parse a float from text.
    #[error("{0}")]
    ParseFloat(#[from] num::ParseFloatError),

    /// Failed to parse a boolean from text.
    #[error("invalid boolean '{0}'")]
    ParseBool(String),

    /// Failed to format a timestamp.
    #[error("{0}")]
    FormatTimestamp(#[from] time::error::Format),

    /// Failed to parse a timestamp.
    #[error("{0}")]
    ParseTimestamp(#[from] time::error::Parse),

    /// An error raised by a payload's own capability.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an [`Error::Custom`] from any displayable message.
    pub fn custom<M: std::fmt::Display>(msg: M) -> Self {
        Self::Custom(msg.to_string())
    }
}
