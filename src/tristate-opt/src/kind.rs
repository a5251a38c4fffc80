use crate::State;

mod sealed {
    pub trait Sealed {}
}

/// The set of states an [`Opt`](crate::Opt) flavor may hold.
///
/// This is a closed set of marker types; every codec consults these
/// constants to decide how absence is written and read.
pub trait Kind: sealed::Sealed {
    /// Whether the flavor can hold [`State::Null`].
    const ALLOWS_NULL: bool;
    /// Whether the flavor can hold [`State::Unset`].
    const ALLOWS_UNSET: bool;
    /// A human-readable name for error messages.
    const NAME: &'static str;

    /// The state of an empty container, and the state that empty
    /// text or binary input decodes to.
    const EMPTY: State = if Self::ALLOWS_UNSET {
        State::Unset
    } else {
        State::Null
    };

    /// The state a missing optional reference maps to.
    const ABSENT: State = if Self::ALLOWS_NULL {
        State::Null
    } else {
        State::Unset
    };

    /// Whether text and binary encodings need a leading tag byte to
    /// tell the absent states apart.
    const TAGGED: bool = Self::ALLOWS_NULL && Self::ALLOWS_UNSET;
}

/// Flavors that can hold [`State::Null`].
pub trait AllowsNull: Kind {}

/// Flavors that can hold [`State::Unset`].
pub trait AllowsUnset: Kind {}

/// Marker for values that are either null or set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NullKind {}

/// Marker for values that are either unset or set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OmitKind {}

/// Marker for values that are unset, null or set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OmitNullKind {}

impl sealed::Sealed for NullKind {}
impl sealed::Sealed for OmitKind {}
impl sealed::Sealed for OmitNullKind {}

impl Kind for NullKind {
    const ALLOWS_NULL: bool = true;
    const ALLOWS_UNSET: bool = false;
    const NAME: &'static str = "nullable";
}

impl Kind for OmitKind {
    const ALLOWS_NULL: bool = false;
    const ALLOWS_UNSET: bool = true;
    const NAME: &'static str = "omittable";
}

impl Kind for OmitNullKind {
    const ALLOWS_NULL: bool = true;
    const ALLOWS_UNSET: bool = true;
    const NAME: &'static str = "nullable-omittable";
}

impl AllowsNull for NullKind {}
impl AllowsNull for OmitNullKind {}

impl AllowsUnset for OmitKind {}
impl AllowsUnset for OmitNullKind {}
