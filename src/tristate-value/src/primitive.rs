use time::OffsetDateTime;

/// A value in the representation accepted by a generic storage column.
///
/// Present payloads are converted into one of the concrete shapes,
/// while [`Primitive::Null`] is the universal signal for absence in
/// both directions of a column boundary.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// No value.
    Null,

    /// A signed integer; every integer width widens to this.
    Int(i64),
    /// A floating-point value; both float widths widen to this.
    Float(f64),
    /// A boolean value.
    Bool(bool),

    /// An opaque sequence of bytes.
    Bytes(Vec<u8>),
    /// A UTF-8 string.
    Str(String),

    /// A point in time, passed through to the store unchanged.
    Timestamp(
        #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))] OffsetDateTime,
    ),
}

impl Primitive {
    /// Whether this is [`Primitive::Null`].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// A short name for the shape of this primitive.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(..) => "int",
            Self::Float(..) => "float",
            Self::Bool(..) => "bool",
            Self::Bytes(..) => "bytes",
            Self::Str(..) => "string",
            Self::Timestamp(..) => "timestamp",
        }
    }
}

impl From<i64> for Primitive {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<u8>> for Primitive {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<OffsetDateTime> for Primitive {
    fn from(value: OffsetDateTime) -> Self {
        Self::Timestamp(value)
    }
}
