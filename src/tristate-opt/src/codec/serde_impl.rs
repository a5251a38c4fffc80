use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{Error, Kind, Opt, State};

/// Set values serialize as `Some(payload)`, anything else as `None`.
impl<T: Serialize, K: Kind> Serialize for Opt<T, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.get() {
            Some(v) => serializer.serialize_some(v),
            None => serializer.serialize_none(),
        }
    }
}

/// A present `None` deserializes as null, or fails if the flavor
/// cannot be null.
///
/// A missing field never reaches this impl; pair the field with
/// `#[serde(default)]` so that it becomes the flavor's empty state.
impl<'de, T: Deserialize<'de>, K: Kind> Deserialize<'de> for Opt<T, K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<T>::deserialize(deserializer)? {
            Some(v) => Ok(Self::from_value(v)),
            None if K::ALLOWS_NULL => Ok(Self::absent(State::Null)),
            None => Err(de::Error::custom(Error::NullNotAllowed)),
        }
    }
}
