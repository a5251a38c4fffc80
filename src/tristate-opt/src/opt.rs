use std::{fmt, marker::PhantomData};

use crate::{AllowsNull, AllowsUnset, Kind, NullKind, OmitKind, OmitNullKind, State};

/// A value that is either null or set.
pub type Nullable<T> = Opt<T, NullKind>;

/// A value that is either unset or set.
pub type Omittable<T> = Opt<T, OmitKind>;

/// A value that is either unset, null or set.
pub type NullableOmittable<T> = Opt<T, OmitNullKind>;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Slot<T> {
    Unset,
    Null,
    Set(T),
}

/// An optional value with a [`State`] drawn from the flavor `K`.
///
/// The payload only exists in [`State::Set`]. Methods that produce
/// the other states are only available when `K` allows them, so a
/// container can never end up in a state its flavor cannot represent.
///
/// Equality compares states first and payloads only when both sides
/// are set.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opt<T, K> {
    slot: Slot<T>,
    kind: PhantomData<K>,
}

impl<T, K: Kind> Opt<T, K> {
    /// Creates a set value.
    #[inline]
    pub const fn from_value(value: T) -> Self {
        Self {
            slot: Slot::Set(value),
            kind: PhantomData,
        }
    }

    /// Creates an absent value in the given non-set `state`.
    ///
    /// Callers are responsible for only passing states the flavor
    /// allows.
    #[inline]
    pub(crate) fn absent(state: State) -> Self {
        debug_assert!(state != State::Set, "absent value cannot be set");
        debug_assert!(state != State::Null || K::ALLOWS_NULL);
        debug_assert!(state != State::Unset || K::ALLOWS_UNSET);

        let slot = match state {
            State::Null => Slot::Null,
            _ => Slot::Unset,
        };

        Self {
            slot,
            kind: PhantomData,
        }
    }

    /// Creates a value from an [`Option`].
    ///
    /// [`None`] maps to null for flavors that allow it and to unset
    /// otherwise.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::from_value(v),
            None => Self::absent(K::ABSENT),
        }
    }

    /// Creates a value by cloning an optional reference.
    ///
    /// Absence maps the same way as in [`Opt::from_option`].
    pub fn from_ref(value: Option<&T>) -> Self
    where
        T: Clone,
    {
        Self::from_option(value.cloned())
    }

    /// Creates a set value if `ok` is true, or an empty one otherwise.
    pub fn from_cond(value: T, ok: bool) -> Self {
        if ok {
            Self::from_value(value)
        } else {
            Self::default()
        }
    }

    /// Gets the current state.
    #[inline]
    pub fn state(&self) -> State {
        match self.slot {
            Slot::Unset => State::Unset,
            Slot::Null => State::Null,
            Slot::Set(..) => State::Set,
        }
    }

    /// Whether a payload is present.
    #[inline]
    pub fn is_set(&self) -> bool {
        matches!(self.slot, Slot::Set(..))
    }

    /// Gets a reference to the payload, if one is present.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        match &self.slot {
            Slot::Set(v) => Some(v),
            _ => None,
        }
    }

    /// Gets a mutable reference to the payload, if one is present.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match &mut self.slot {
            Slot::Set(v) => Some(v),
            _ => None,
        }
    }

    /// Converts into an [`Option`], discarding the distinction between
    /// the absent states.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self.slot {
            Slot::Set(v) => Some(v),
            _ => None,
        }
    }

    /// Gets the payload or `fallback` if there is none.
    #[inline]
    pub fn get_or(self, fallback: T) -> T {
        self.into_option().unwrap_or(fallback)
    }

    /// Gets the payload or the default value of `T`.
    #[inline]
    pub fn get_or_default(self) -> T
    where
        T: Default,
    {
        self.into_option().unwrap_or_default()
    }

    /// Gets the payload.
    ///
    /// # Panics
    ///
    /// Panics if no payload is present. Asserting presence of an absent
    /// value is a bug in the caller, not a data condition.
    #[inline]
    #[track_caller]
    pub fn must_get(self) -> T {
        let state = self.state();
        match self.slot {
            Slot::Set(v) => v,
            _ => panic!("no value present in {state} {} value", K::NAME),
        }
    }

    /// Borrows the payload, keeping the state.
    #[inline]
    pub fn as_ref(&self) -> Opt<&T, K> {
        let slot = match &self.slot {
            Slot::Unset => Slot::Unset,
            Slot::Null => Slot::Null,
            Slot::Set(v) => Slot::Set(v),
        };

        Opt {
            slot,
            kind: PhantomData,
        }
    }

    /// Mutably borrows the payload, keeping the state.
    #[inline]
    pub fn as_mut(&mut self) -> Opt<&mut T, K> {
        let slot = match &mut self.slot {
            Slot::Unset => Slot::Unset,
            Slot::Null => Slot::Null,
            Slot::Set(v) => Slot::Set(v),
        };

        Opt {
            slot,
            kind: PhantomData,
        }
    }

    /// Picks whichever of `self` and `other` has the higher state.
    ///
    /// Precedence is `Set > Null > Unset`. On a tie `self` wins, so
    /// two set values yield the payload of `self`.
    ///
    /// | self  | other | result |
    /// |-------|-------|--------|
    /// | set   | _     | self   |
    /// | null  | set   | other  |
    /// | null  | _     | self   |
    /// | unset | set   | other  |
    /// | unset | null  | other  |
    /// | unset | unset | self   |
    #[inline]
    pub fn or(self, other: Self) -> Self {
        if other.state() > self.state() {
            other
        } else {
            self
        }
    }

    /// Transforms the payload, if one is present.
    ///
    /// `f` is called at most once and never for absent values, which
    /// keep their state in the result.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Opt<U, K>
    where
        F: FnOnce(T) -> U,
    {
        let slot = match self.slot {
            Slot::Unset => Slot::Unset,
            Slot::Null => Slot::Null,
            Slot::Set(v) => Slot::Set(f(v)),
        };

        Opt {
            slot,
            kind: PhantomData,
        }
    }

    /// Sets the payload.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.slot = Slot::Set(value);
    }

    /// Sets the payload from an [`Option`], mapping [`None`] like
    /// [`Opt::from_option`] does.
    pub fn set_from_option(&mut self, value: Option<T>) {
        *self = Self::from_option(value);
    }

    /// Sets the payload by cloning an optional reference, mapping
    /// [`None`] like [`Opt::from_option`] does.
    pub fn set_from_ref(&mut self, value: Option<&T>)
    where
        T: Clone,
    {
        *self = Self::from_ref(value);
    }
}

impl<T, K: AllowsNull> Opt<T, K> {
    /// Creates a null value.
    #[inline]
    pub const fn null() -> Self {
        Self {
            slot: Slot::Null,
            kind: PhantomData,
        }
    }

    /// Whether the value is null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self.slot, Slot::Null)
    }

    /// Drops the payload and makes the value null.
    #[inline]
    pub fn clear_to_null(&mut self) {
        self.slot = Slot::Null;
    }
}

impl<T, K: AllowsUnset> Opt<T, K> {
    /// Creates an unset value.
    #[inline]
    pub const fn unset() -> Self {
        Self {
            slot: Slot::Unset,
            kind: PhantomData,
        }
    }

    /// Whether the value is unset.
    ///
    /// Use this with `#[serde(skip_serializing_if = "Opt::is_unset")]`
    /// to leave unset fields out of serialized documents.
    #[inline]
    pub fn is_unset(&self) -> bool {
        matches!(self.slot, Slot::Unset)
    }

    /// Drops the payload and makes the value unset.
    #[inline]
    pub fn clear_to_unset(&mut self) {
        self.slot = Slot::Unset;
    }
}

impl<T, K: Kind> Default for Opt<T, K> {
    /// Creates an empty value: null for [`Nullable`], unset otherwise.
    fn default() -> Self {
        Self::absent(K::EMPTY)
    }
}

impl<T: fmt::Debug, K> fmt::Debug for Opt<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Unset => f.write_str("Unset"),
            Slot::Null => f.write_str("Null"),
            Slot::Set(v) => f.debug_tuple("Set").field(v).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn construction() {
        assert_eq!(Nullable::from_value(1).state(), State::Set);
        assert_eq!(Nullable::<i32>::default().state(), State::Null);
        assert_eq!(Omittable::<i32>::default().state(), State::Unset);
        assert_eq!(NullableOmittable::<i32>::default().state(), State::Unset);

        assert!(Nullable::<i32>::from_option(None).is_null());
        assert!(Omittable::<i32>::from_option(None).is_unset());
        assert!(NullableOmittable::<i32>::from_option(None).is_null());

        let five = 5;
        assert_eq!(Omittable::from_ref(Some(&five)).get(), Some(&5));

        assert!(Nullable::from_cond(3, false).is_null());
        assert!(Omittable::from_cond(3, false).is_unset());
        assert!(NullableOmittable::from_cond(3, false).is_unset());
        assert_eq!(NullableOmittable::from_cond(3, true).get(), Some(&3));
    }

    #[test]
    fn accessors() {
        let set = NullableOmittable::from_value("hi");
        assert_eq!(set.get(), Some(&"hi"));
        assert_eq!(set.get_or("fallback"), "hi");
        assert_eq!(set.must_get(), "hi");

        let null = NullableOmittable::<&str>::null();
        assert_eq!(null.get(), None);
        assert_eq!(null.get_or("fallback"), "fallback");
        assert_eq!(null.get_or_default(), "");
    }

    #[test]
    #[should_panic(expected = "no value present")]
    fn must_get_panics_when_absent() {
        Omittable::<u8>::unset().must_get();
    }

    #[test]
    fn mutation() {
        let mut v = NullableOmittable::unset();
        v.set(String::from("hello"));
        assert!(v.is_set());

        v.clear_to_null();
        assert!(v.is_null());

        v.clear_to_unset();
        assert!(v.is_unset());

        let hello = String::from("hello");
        v.set_from_ref(Some(&hello));
        assert_eq!(v.get(), Some(&hello));

        v.set_from_ref(None);
        assert!(v.is_null());

        if let Some(s) = v.get_mut() {
            s.push('!');
        }
        assert!(v.is_null());

        v.set(String::from("hi"));
        if let Some(s) = v.get_mut() {
            s.push('!');
        }
        assert_eq!(v.get().map(String::as_str), Some("hi!"));
    }

    #[test]
    fn or_precedence() {
        type V = NullableOmittable<i32>;

        assert_eq!(V::from_value(1).or(V::from_value(2)), V::from_value(1));
        assert_eq!(V::from_value(1).or(V::null()), V::from_value(1));
        assert_eq!(V::from_value(1).or(V::unset()), V::from_value(1));

        assert_eq!(V::null().or(V::from_value(2)), V::from_value(2));
        assert_eq!(V::null().or(V::null()), V::null());
        assert_eq!(V::null().or(V::unset()), V::null());

        assert_eq!(V::unset().or(V::from_value(2)), V::from_value(2));
        assert_eq!(V::unset().or(V::null()), V::null());
        assert_eq!(V::unset().or(V::unset()), V::unset());
    }

    #[test]
    fn or_on_two_state_flavors() {
        assert_eq!(
            Nullable::null().or(Nullable::from_value(2)),
            Nullable::from_value(2)
        );
        assert_eq!(
            Omittable::from_value(1).or(Omittable::from_value(2)),
            Omittable::from_value(1)
        );
        assert_eq!(Omittable::<i32>::unset().or(Omittable::unset()), Omittable::unset());
    }

    #[test]
    fn map_skips_absent_values() {
        let calls = Cell::new(0);
        let f = |v: i32| {
            calls.set(calls.get() + 1);
            v.to_string()
        };

        assert_eq!(
            NullableOmittable::from_value(4).map(f),
            NullableOmittable::from_value(String::from("4"))
        );
        assert_eq!(calls.get(), 1);

        assert!(NullableOmittable::<i32>::null().map(f).is_null());
        assert!(NullableOmittable::<i32>::unset().map(f).is_unset());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn equality() {
        assert_eq!(Nullable::from_value(1), Nullable::from_value(1));
        assert_ne!(Nullable::from_value(1), Nullable::from_value(2));
        assert_ne!(Nullable::from_value(1), Nullable::null());
        assert_ne!(NullableOmittable::<i32>::null(), NullableOmittable::unset());

        let mut cleared = NullableOmittable::from_value(1);
        cleared.clear_to_null();
        assert_eq!(cleared, NullableOmittable::null());
    }

    #[test]
    fn debug_output() {
        assert_eq!(format!("{:?}", Nullable::from_value(1)), "Set(1)");
        assert_eq!(format!("{:?}", Nullable::<i32>::null()), "Null");
        assert_eq!(format!("{:?}", Omittable::<i32>::unset()), "Unset");
    }
}
