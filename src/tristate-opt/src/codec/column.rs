use tristate_value::{Decode, Encode, Primitive};

use crate::{Error, Kind, Opt, State};

impl<T: Encode, K: Kind> Opt<T, K> {
    /// Converts the value into a storage column primitive.
    ///
    /// Unset and null are both written as [`Primitive::Null`]; a column
    /// has no way to leave a value out.
    pub fn to_column(&self) -> Result<Primitive, Error> {
        match self.get() {
            Some(v) => tristate_value::to_storage_value(v).map_err(Into::into),
            None => Ok(Primitive::Null),
        }
    }
}

impl<T: Decode, K: Kind> Opt<T, K> {
    /// Reads a value from a storage column primitive.
    ///
    /// [`Primitive::Null`] is null for flavors that allow it and an
    /// error for [`Omittable`](crate::Omittable).
    pub fn from_column(primitive: Primitive) -> Result<Self, Error> {
        if primitive.is_null() {
            return if K::ALLOWS_NULL {
                Ok(Self::absent(State::Null))
            } else {
                log::debug!("Rejected null column for {} value", K::NAME);
                Err(Error::NullNotAllowed)
            };
        }

        let value = tristate_value::from_storage_value(primitive)?;
        Ok(Self::from_value(value))
    }
}
