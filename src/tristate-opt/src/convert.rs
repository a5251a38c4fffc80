//! Conversions between the container flavors.
//!
//! Widening into [`NullableOmittable`] is lossless and goes through
//! [`From`]. Narrowing fails when the source state has no counterpart
//! in the target flavor.

use crate::{Error, Kind, NullKind, Nullable, NullableOmittable, OmitKind, Omittable, State};

impl<T> From<Nullable<T>> for NullableOmittable<T> {
    fn from(value: Nullable<T>) -> Self {
        match value.state() {
            State::Null => Self::null(),
            _ => Self::from_option(value.into_option()),
        }
    }
}

impl<T> From<Omittable<T>> for NullableOmittable<T> {
    fn from(value: Omittable<T>) -> Self {
        match value.into_option() {
            Some(v) => Self::from_value(v),
            None => Self::unset(),
        }
    }
}

impl<T> NullableOmittable<T> {
    /// Narrows into a [`Nullable`], failing for unset values.
    pub fn try_into_nullable(self) -> Result<Nullable<T>, Error> {
        match self.state() {
            State::Unset => Err(Error::Unrepresentable {
                state: State::Unset,
                target: NullKind::NAME,
            }),
            _ => Ok(Nullable::from_option(self.into_option())),
        }
    }

    /// Narrows into an [`Omittable`], failing for null values.
    pub fn try_into_omittable(self) -> Result<Omittable<T>, Error> {
        match self.state() {
            State::Null => Err(Error::Unrepresentable {
                state: State::Null,
                target: OmitKind::NAME,
            }),
            _ => Ok(Omittable::from_option(self.into_option())),
        }
    }

    /// Narrows into a [`Nullable`].
    ///
    /// # Panics
    ///
    /// Panics if the value is unset.
    #[track_caller]
    pub fn must_get_nullable(self) -> Nullable<T> {
        match self.try_into_nullable() {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    /// Narrows into an [`Omittable`].
    ///
    /// # Panics
    ///
    /// Panics if the value is null.
    #[track_caller]
    pub fn must_get_omittable(self) -> Omittable<T> {
        match self.try_into_omittable() {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    /// Borrows the payload as an [`Option`] where null is [`None`].
    ///
    /// # Panics
    ///
    /// Panics if the value is unset, which has no [`Option`] form here.
    #[track_caller]
    pub fn must_as_option(&self) -> Option<&T> {
        match self.state() {
            State::Unset => panic!("unset value cannot be coerced into an option"),
            _ => self.get(),
        }
    }
}
