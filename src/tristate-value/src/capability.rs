use crate::{Error, Primitive, Shape, engine};

/// Conversion capabilities of a payload type on the way out.
///
/// Every method is optional. Returning [`None`] means the type does not
/// provide that capability and the next one in line is tried; returning
/// `Some(Err(..))` aborts the conversion with that error.
///
/// A type that implements this trait without overriding anything is
/// valid, but every conversion of it will fail with an unsupported
/// type error.
pub trait Encode {
    /// Produces a custom storage value for the type.
    ///
    /// This has priority over every other conversion when writing to a
    /// storage column, and its result is handed to the column as-is.
    fn storage_value(&self) -> Option<Result<Primitive, Error>> {
        None
    }

    /// Encodes the value into its own binary representation.
    fn encode_binary(&self) -> Option<Result<Vec<u8>, Error>> {
        None
    }

    /// Encodes the value into its own textual representation.
    fn encode_text(&self) -> Option<Result<Vec<u8>, Error>> {
        None
    }

    /// Describes the structural shape of the value.
    fn shape(&self) -> Shape<'_> {
        Shape::Unsupported
    }
}

/// Conversion capabilities of a payload type on the way in.
///
/// Mirrors [`Encode`]: returning [`None`] from a capability defers to
/// the next conversion in line.
pub trait Decode: Sized {
    /// Decodes a value from its own binary representation.
    fn decode_binary(bytes: &[u8]) -> Option<Result<Self, Error>> {
        let _ = bytes;
        None
    }

    /// Decodes a value from its own textual representation.
    fn decode_text(text: &[u8]) -> Option<Result<Self, Error>> {
        let _ = text;
        None
    }

    /// Structurally converts raw bytes into a value.
    ///
    /// This is the last resort for both text and binary decoding and
    /// is implemented for the builtin scalar types, which parse the
    /// bytes as UTF-8 text.
    fn from_raw(bytes: &[u8]) -> Option<Result<Self, Error>> {
        let _ = bytes;
        None
    }

    /// Assigns a non-null storage primitive to a new value.
    ///
    /// The default implementation routes byte and string primitives
    /// through the binary and text decoding chains. Types with their
    /// own column representation override this.
    fn from_primitive(primitive: Primitive) -> Result<Self, Error> {
        engine::assign_with_capabilities(primitive)
    }
}
