//! Format adapters for [`Opt`](crate::Opt).
//!
//! Every flavor can be written to and read from four boundaries:
//!
//! - a structured document, through a [`DocumentCodec`] such as [`Json`],
//!   and through [`serde`] when the value is a field of a larger type;
//! - text, using the payload's text capability;
//! - binary, using the payload's binary capability;
//! - a storage column [`Primitive`](crate::Primitive).
//!
//! Text and binary use empty input as the absence sentinel. Only
//! [`NullableOmittable`](crate::NullableOmittable) needs to tell two
//! absent states apart there, so its encodings carry a leading tag byte.

mod binary;
mod column;
mod document;
pub use document::*;
mod serde_impl;
mod tagged;
mod text;

/// Leading byte of the text encoding of a null tri-state value.
pub const TEXT_NULL: u8 = b'0';
/// Leading byte of the text encoding of a set tri-state value.
pub const TEXT_SET: u8 = b'1';

/// Leading byte of the binary encoding of a null tri-state value.
pub const BINARY_NULL: u8 = 0x00;
/// Leading byte of the binary encoding of a set tri-state value.
pub const BINARY_SET: u8 = 0x01;
