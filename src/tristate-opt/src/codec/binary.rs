use tristate_value::{Decode, Encode};

use super::{
    BINARY_NULL, BINARY_SET,
    tagged::{self, Tags},
};
use crate::{Error, Kind, Opt};

const TAGS: Tags = Tags {
    null: BINARY_NULL,
    set: BINARY_SET,
};

impl<T: Encode, K: Kind> Opt<T, K> {
    /// Encodes the value as binary.
    ///
    /// The payload goes through its binary capability, then its text
    /// capability, then its structural byte form. States map the same
    /// way as in [`Opt::to_text`] with tag bytes `0x00` and `0x01`.
    pub fn to_binary(&self) -> Result<Vec<u8>, Error> {
        tagged::encode(self, TAGS, tristate_value::encode_binary)
    }
}

impl<T: Decode, K: Kind> Opt<T, K> {
    /// Decodes a value written by [`Opt::to_binary`].
    pub fn from_binary(bytes: &[u8]) -> Result<Self, Error> {
        tagged::decode(bytes, TAGS, tristate_value::decode_binary)
    }
}
