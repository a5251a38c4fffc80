use std::fmt;

/// The state of an optional value.
///
/// The variant order is the precedence used by [`Opt::or`]:
/// `Unset < Null < Set`.
///
/// [`Opt::or`]: crate::Opt::or
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// The value was never provided.
    Unset,
    /// The value was explicitly provided as absent.
    Null,
    /// The value is present.
    Set,
}

impl State {
    /// Gets the lowercase name of the state.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Null => "null",
            Self::Set => "set",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
