use std::any::type_name;

use time::format_description::well_known::Rfc3339;

use crate::{Decode, Encode, Error, Primitive, Shape};

/// Converts a present payload into a storage column [`Primitive`].
///
/// Conversions are attempted in a fixed order and the first one that
/// applies wins:
///
/// 1. [`Encode::storage_value`], returned verbatim. Every
///    [`Primitive`] is a valid column value, so its result is not
///    inspected further.
/// 2. [`Encode::encode_binary`], stored as [`Primitive::Bytes`].
/// 3. [`Encode::encode_text`], stored as [`Primitive::Bytes`].
/// 4. The structural [`Shape`] of the value. Unsigned integers that
///    do not fit into [`i64`] fail with [`Error::IntegerOverflow`].
///
/// Absent payloads never reach this function; callers map them to
/// [`Primitive::Null`] on their own.
pub fn to_storage_value<T: Encode + ?Sized>(value: &T) -> Result<Primitive, Error> {
    let name = type_name::<T>();

    if let Some(res) = value.storage_value() {
        log::trace!("Using custom storage value for '{name}'");
        return res;
    }

    if let Some(res) = value.encode_binary() {
        log::trace!("Storing binary encoding of '{name}'");
        return res.map(Primitive::Bytes);
    }

    if let Some(res) = value.encode_text() {
        log::trace!("Storing text encoding of '{name}'");
        return res.map(Primitive::Bytes);
    }

    match value.shape() {
        Shape::Int(v) => Ok(Primitive::Int(v)),
        Shape::Uint(v) => i64::try_from(v)
            .map(Primitive::Int)
            .map_err(|_| Error::IntegerOverflow(v)),
        Shape::Float(v) => Ok(Primitive::Float(v)),
        Shape::Bool(v) => Ok(Primitive::Bool(v)),
        Shape::Bytes(v) => Ok(Primitive::Bytes(v.to_vec())),
        Shape::Str(v) => Ok(Primitive::Str(v.to_owned())),
        Shape::Timestamp(v) => Ok(Primitive::Timestamp(v)),
        Shape::Unsupported => Err(Error::UnsupportedStorageType(name)),
    }
}

/// Assigns a storage column [`Primitive`] to a new payload value.
///
/// [`Primitive::Null`] carries no payload and is rejected here; the
/// optional containers decide what absence means before calling this.
pub fn from_storage_value<T: Decode>(primitive: Primitive) -> Result<T, Error> {
    if primitive.is_null() {
        return Err(unsupported_assign::<T>(&primitive));
    }

    T::from_primitive(primitive)
}

/// Encodes a payload as text.
///
/// Uses [`Encode::encode_text`] if the type provides it and falls back
/// to a structural conversion otherwise.
pub fn encode_text<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
    if let Some(res) = value.encode_text() {
        return res;
    }

    log::trace!("Falling back to structural text for '{}'", type_name::<T>());
    structural_bytes(value.shape())?.ok_or(Error::UnsupportedTextEncoding(type_name::<T>()))
}

/// Encodes a payload as binary.
///
/// Prefers [`Encode::encode_binary`], then [`Encode::encode_text`],
/// then a structural conversion.
pub fn encode_binary<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
    if let Some(res) = value.encode_binary() {
        return res;
    }

    if let Some(res) = value.encode_text() {
        log::trace!("Using text encoding as binary for '{}'", type_name::<T>());
        return res;
    }

    log::trace!("Falling back to structural binary for '{}'", type_name::<T>());
    structural_bytes(value.shape())?.ok_or(Error::UnsupportedBinaryEncoding(type_name::<T>()))
}

/// Decodes a payload from text.
///
/// Uses [`Decode::decode_text`] if the type provides it and falls back
/// to [`Decode::from_raw`] otherwise.
pub fn decode_text<T: Decode>(text: &[u8]) -> Result<T, Error> {
    T::decode_text(text)
        .or_else(|| T::from_raw(text))
        .unwrap_or(Err(Error::UnsupportedTextDecoding(type_name::<T>())))
}

/// Decodes a payload from binary.
///
/// Prefers [`Decode::decode_binary`], then [`Decode::decode_text`],
/// then [`Decode::from_raw`].
pub fn decode_binary<T: Decode>(bytes: &[u8]) -> Result<T, Error> {
    T::decode_binary(bytes)
        .or_else(|| T::decode_text(bytes))
        .or_else(|| T::from_raw(bytes))
        .unwrap_or(Err(Error::UnsupportedBinaryDecoding(type_name::<T>())))
}

pub(crate) fn assign_with_capabilities<T: Decode>(primitive: Primitive) -> Result<T, Error> {
    let res = match &primitive {
        Primitive::Bytes(v) => T::decode_binary(v)
            .or_else(|| T::decode_text(v))
            .or_else(|| T::from_raw(v)),
        Primitive::Str(v) => T::decode_text(v.as_bytes()).or_else(|| T::from_raw(v.as_bytes())),
        _ => None,
    };

    res.unwrap_or_else(|| Err(unsupported_assign::<T>(&primitive)))
}

pub(crate) fn unsupported_assign<T>(primitive: &Primitive) -> Error {
    Error::UnsupportedAssign {
        from: primitive.kind(),
        to: type_name::<T>(),
    }
}

/// The structural text form of a primitive, as used when assigning
/// numbers and timestamps to string-like payloads.
pub(crate) fn primitive_text(primitive: &Primitive) -> Result<Option<Vec<u8>>, Error> {
    let shape = match primitive {
        Primitive::Null => return Ok(None),
        Primitive::Int(v) => Shape::Int(*v),
        Primitive::Float(v) => Shape::Float(*v),
        Primitive::Bool(v) => Shape::Bool(*v),
        Primitive::Bytes(v) => Shape::Bytes(v),
        Primitive::Str(v) => Shape::Str(v),
        Primitive::Timestamp(v) => Shape::Timestamp(*v),
    };

    structural_bytes(shape)
}

fn structural_bytes(shape: Shape<'_>) -> Result<Option<Vec<u8>>, Error> {
    let bytes = match shape {
        Shape::Int(v) => v.to_string().into_bytes(),
        Shape::Uint(v) => v.to_string().into_bytes(),
        Shape::Float(v) => v.to_string().into_bytes(),
        Shape::Bool(v) => v.to_string().into_bytes(),
        Shape::Bytes(v) => v.to_vec(),
        Shape::Str(v) => v.as_bytes().to_vec(),
        Shape::Timestamp(v) => v.format(&Rfc3339)?.into_bytes(),
        Shape::Unsupported => return Ok(None),
    };

    Ok(Some(bytes))
}
