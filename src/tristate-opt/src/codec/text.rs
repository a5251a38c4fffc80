use tristate_value::{Decode, Encode};

use super::{
    TEXT_NULL, TEXT_SET,
    tagged::{self, Tags},
};
use crate::{Error, Kind, Opt};

const TAGS: Tags = Tags {
    null: TEXT_NULL,
    set: TEXT_SET,
};

impl<T: Encode, K: Kind> Opt<T, K> {
    /// Encodes the value as text.
    ///
    /// A set payload is written through its text capability, or its
    /// structural string form when it has none. Absent values are
    /// empty, except that a null [`NullableOmittable`] is written as
    /// `0` and a set one gets a leading `1`.
    ///
    /// [`NullableOmittable`]: crate::NullableOmittable
    pub fn to_text(&self) -> Result<Vec<u8>, Error> {
        tagged::encode(self, TAGS, tristate_value::encode_text)
    }
}

impl<T: Decode, K: Kind> Opt<T, K> {
    /// Decodes a value written by [`Opt::to_text`].
    ///
    /// Empty input is null for [`Nullable`] and unset otherwise.
    ///
    /// [`Nullable`]: crate::Nullable
    pub fn from_text(text: &[u8]) -> Result<Self, Error> {
        tagged::decode(text, TAGS, tristate_value::decode_text)
    }
}
