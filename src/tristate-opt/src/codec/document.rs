use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Kind, Opt, State};

/// A structured document format that payloads are written in.
///
/// The codec only handles set payloads. [`Opt`] decides on its own
/// when to emit or expect the [`DocumentCodec::NULL`] sentinel.
pub trait DocumentCodec {
    /// The exact byte sequence that represents an absent value.
    const NULL: &'static [u8];

    /// Encodes a payload into a document.
    fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, Error>;

    /// Decodes a payload from a document.
    fn decode<T: DeserializeOwned>(input: &[u8]) -> Result<T, Error>;
}

/// The JSON document codec, backed by [`serde_json`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Json;

impl DocumentCodec for Json {
    const NULL: &'static [u8] = b"null";

    fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(value).map_err(Into::into)
    }

    fn decode<T: DeserializeOwned>(input: &[u8]) -> Result<T, Error> {
        serde_json::from_slice(input).map_err(Into::into)
    }
}

impl<T, K: Kind> Opt<T, K> {
    /// Encodes the value as a document with codec `C`.
    ///
    /// Unset and null are both written as the null sentinel, so a
    /// document alone cannot tell them apart. Leave unset struct fields
    /// out with `skip_serializing_if` instead.
    pub fn to_document<C: DocumentCodec>(&self) -> Result<Vec<u8>, Error>
    where
        T: Serialize,
    {
        match self.get() {
            Some(v) => C::encode(v),
            None => Ok(C::NULL.to_vec()),
        }
    }

    /// Decodes a value from a document with codec `C`.
    ///
    /// | input         | nullable     | omittable        | both  |
    /// |---------------|--------------|------------------|-------|
    /// | empty         | `EmptyInput` | unset            | unset |
    /// | null sentinel | null         | `NullNotAllowed` | null  |
    /// | anything else | set          | set              | set   |
    pub fn from_document<C: DocumentCodec>(input: &[u8]) -> Result<Self, Error>
    where
        T: DeserializeOwned,
    {
        if input.is_empty() {
            return if K::ALLOWS_UNSET {
                Ok(Self::absent(State::Unset))
            } else {
                Err(Error::EmptyInput)
            };
        }

        if input == C::NULL {
            return if K::ALLOWS_NULL {
                Ok(Self::absent(State::Null))
            } else {
                log::debug!("Rejected null document for {} value", K::NAME);
                Err(Error::NullNotAllowed)
            };
        }

        C::decode(input).map(Self::from_value)
    }

    /// Encodes the value as JSON.
    ///
    /// Shorthand for [`Opt::to_document`] with [`Json`].
    pub fn to_json(&self) -> Result<Vec<u8>, Error>
    where
        T: Serialize,
    {
        self.to_document::<Json>()
    }

    /// Decodes a value from JSON.
    ///
    /// Shorthand for [`Opt::from_document`] with [`Json`].
    pub fn from_json(input: &[u8]) -> Result<Self, Error>
    where
        T: DeserializeOwned,
    {
        Self::from_document::<Json>(input)
    }
}
