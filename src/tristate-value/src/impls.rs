//! Capability implementations for builtin payload types.

use std::str::{self, FromStr};

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{Decode, Encode, Error, Primitive, Shape, engine};

#[inline]
fn parse_text<T>(bytes: &[u8]) -> Result<T, Error>
where
    T: FromStr,
    Error: From<T::Err>,
{
    str::from_utf8(bytes)?.parse().map_err(Into::into)
}

fn parse_bool(bytes: &[u8]) -> Result<bool, Error> {
    match str::from_utf8(bytes)? {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        other => Err(Error::ParseBool(other.to_owned())),
    }
}

fn parse_timestamp(bytes: &[u8]) -> Result<OffsetDateTime, Error> {
    let text = str::from_utf8(bytes)?;
    OffsetDateTime::parse(text, &Rfc3339).map_err(Into::into)
}

/// Parses a float, rejecting finite text that saturated to infinity.
fn parse_float<T>(bytes: &[u8], is_finite: fn(T) -> bool) -> Result<T, Error>
where
    T: FromStr + Copy,
    Error: From<T::Err>,
{
    let text = str::from_utf8(bytes)?;
    let v = text.parse()?;

    let literal = text.trim_start_matches(['+', '-']);
    let non_finite_literal = ["inf", "infinity", "nan"]
        .iter()
        .any(|s| literal.eq_ignore_ascii_case(s));

    if is_finite(v) || non_finite_literal {
        Ok(v)
    } else {
        Err(out_of_range::<T>(text))
    }
}

fn out_of_range<T>(value: impl ToString) -> Error {
    Error::OutOfRange {
        value: value.to_string(),
        to: std::any::type_name::<T>(),
    }
}

macro_rules! int_impl {
    ($variant:ident => $($ty:ty),* $(,)*) => {
        $(
            impl Encode for $ty {
                #[inline]
                fn shape(&self) -> Shape<'_> {
                    Shape::$variant(*self as _)
                }
            }

            impl Decode for $ty {
                fn from_raw(bytes: &[u8]) -> Option<Result<Self, Error>> {
                    Some(parse_text(bytes))
                }

                fn from_primitive(primitive: Primitive) -> Result<Self, Error> {
                    match primitive {
                        Primitive::Int(v) => <$ty>::try_from(v).map_err(|_| out_of_range::<Self>(v)),
                        Primitive::Float(v) => parse_text(v.to_string().as_bytes()),
                        Primitive::Bytes(v) => parse_text(&v),
                        Primitive::Str(v) => parse_text(v.as_bytes()),
                        p => Err(engine::unsupported_assign::<Self>(&p)),
                    }
                }
            }
        )*
    };
}

int_impl!(Int => i8, i16, i32, i64, isize);
int_impl!(Uint => u8, u16, u32, u64, usize);

macro_rules! float_impl {
    ($($ty:ty),* $(,)*) => {
        $(
            impl Encode for $ty {
                #[inline]
                fn shape(&self) -> Shape<'_> {
                    Shape::Float(*self as f64)
                }
            }

            impl Decode for $ty {
                fn from_raw(bytes: &[u8]) -> Option<Result<Self, Error>> {
                    Some(parse_float(bytes, <$ty>::is_finite))
                }

                fn from_primitive(primitive: Primitive) -> Result<Self, Error> {
                    match primitive {
                        Primitive::Float(v) => {
                            let narrowed = v as $ty;
                            if narrowed.is_finite() || !v.is_finite() {
                                Ok(narrowed)
                            } else {
                                Err(out_of_range::<Self>(v))
                            }
                        }
                        Primitive::Int(v) => Ok(v as $ty),
                        Primitive::Bytes(v) => parse_float(&v, <$ty>::is_finite),
                        Primitive::Str(v) => parse_float(v.as_bytes(), <$ty>::is_finite),
                        p => Err(engine::unsupported_assign::<Self>(&p)),
                    }
                }
            }
        )*
    };
}

float_impl!(f32, f64);

impl Encode for bool {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        Shape::Bool(*self)
    }
}

impl Decode for bool {
    fn from_raw(bytes: &[u8]) -> Option<Result<Self, Error>> {
        Some(parse_bool(bytes))
    }

    fn from_primitive(primitive: Primitive) -> Result<Self, Error> {
        match primitive {
            Primitive::Bool(v) => Ok(v),
            Primitive::Int(0) => Ok(false),
            Primitive::Int(1) => Ok(true),
            Primitive::Int(v) => Err(out_of_range::<Self>(v)),
            Primitive::Bytes(v) => parse_bool(&v),
            Primitive::Str(v) => parse_bool(v.as_bytes()),
            p => Err(engine::unsupported_assign::<Self>(&p)),
        }
    }
}

impl Encode for str {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        Shape::Str(self)
    }
}

impl Encode for String {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        Shape::Str(self)
    }
}

impl Decode for String {
    fn from_raw(bytes: &[u8]) -> Option<Result<Self, Error>> {
        Some(str::from_utf8(bytes).map(str::to_owned).map_err(Into::into))
    }

    fn from_primitive(primitive: Primitive) -> Result<Self, Error> {
        match primitive {
            Primitive::Str(v) => Ok(v),
            Primitive::Bytes(v) => String::from_utf8(v).map_err(|e| e.utf8_error().into()),
            p => match engine::primitive_text(&p)? {
                Some(text) => String::from_utf8(text).map_err(|e| e.utf8_error().into()),
                None => Err(engine::unsupported_assign::<Self>(&p)),
            },
        }
    }
}

impl Encode for [u8] {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        Shape::Bytes(self)
    }
}

impl Encode for Vec<u8> {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        Shape::Bytes(self)
    }
}

impl Decode for Vec<u8> {
    fn from_raw(bytes: &[u8]) -> Option<Result<Self, Error>> {
        Some(Ok(bytes.to_vec()))
    }

    fn from_primitive(primitive: Primitive) -> Result<Self, Error> {
        match primitive {
            Primitive::Bytes(v) => Ok(v),
            Primitive::Str(v) => Ok(v.into_bytes()),
            p => engine::primitive_text(&p)?.ok_or_else(|| engine::unsupported_assign::<Self>(&p)),
        }
    }
}

impl Encode for OffsetDateTime {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        Shape::Timestamp(*self)
    }
}

impl Decode for OffsetDateTime {
    fn from_raw(bytes: &[u8]) -> Option<Result<Self, Error>> {
        Some(parse_timestamp(bytes))
    }

    fn from_primitive(primitive: Primitive) -> Result<Self, Error> {
        match primitive {
            Primitive::Timestamp(v) => Ok(v),
            Primitive::Bytes(v) => parse_timestamp(&v),
            Primitive::Str(v) => parse_timestamp(v.as_bytes()),
            p => Err(engine::unsupported_assign::<Self>(&p)),
        }
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn storage_value(&self) -> Option<Result<Primitive, Error>> {
        (**self).storage_value()
    }

    fn encode_binary(&self) -> Option<Result<Vec<u8>, Error>> {
        (**self).encode_binary()
    }

    fn encode_text(&self) -> Option<Result<Vec<u8>, Error>> {
        (**self).encode_text()
    }

    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn storage_value(&self) -> Option<Result<Primitive, Error>> {
        (**self).storage_value()
    }

    fn encode_binary(&self) -> Option<Result<Vec<u8>, Error>> {
        (**self).encode_binary()
    }

    fn encode_text(&self) -> Option<Result<Vec<u8>, Error>> {
        (**self).encode_text()
    }

    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode_binary(bytes: &[u8]) -> Option<Result<Self, Error>> {
        T::decode_binary(bytes).map(|r| r.map(Box::new))
    }

    fn decode_text(text: &[u8]) -> Option<Result<Self, Error>> {
        T::decode_text(text).map(|r| r.map(Box::new))
    }

    fn from_raw(bytes: &[u8]) -> Option<Result<Self, Error>> {
        T::from_raw(bytes).map(|r| r.map(Box::new))
    }

    fn from_primitive(primitive: Primitive) -> Result<Self, Error> {
        T::from_primitive(primitive).map(Box::new)
    }
}
