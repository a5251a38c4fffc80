use time::OffsetDateTime;

/// The structural view of a payload, used when no capability of the
/// payload type claims a conversion.
///
/// Integer widths are collapsed into their signed or unsigned 64-bit
/// forms; widening into a [`Primitive`](crate::Primitive) is left to
/// the conversion functions so overflow is reported there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape<'a> {
    /// Any signed integer width.
    Int(i64),
    /// Any unsigned integer width.
    Uint(u64),
    /// Any float width.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// A sequence of bytes.
    Bytes(&'a [u8]),
    /// A UTF-8 string.
    Str(&'a str),
    /// A passthrough timestamp.
    Timestamp(OffsetDateTime),
    /// No structural conversion applies.
    Unsupported,
}
