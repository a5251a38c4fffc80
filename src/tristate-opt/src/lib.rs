//! Optional values that keep "never provided" and "explicitly absent"
//! apart.
//!
//! [`Option`] only knows whether a value is there. Partial updates need
//! more: a PATCH body that leaves a field out means "keep it", while an
//! explicit `null` means "clear it". This crate provides one container,
//! [`Opt`], in three flavors that differ in the states they can hold:
//!
//! | Alias                   | States            |
//! |-------------------------|-------------------|
//! | [`Nullable<T>`]         | null, set         |
//! | [`Omittable<T>`]        | unset, set        |
//! | [`NullableOmittable<T>`]| unset, null, set  |
//!
//! Each flavor knows how to represent itself in a structured document
//! (see [`codec::DocumentCodec`]), as text, as binary and as a storage
//! column [`Primitive`]. The exact mapping of states onto each format
//! is documented on the respective methods.
//!
//! Some formats cannot express all three states. Unset and null
//! collapse into the same representation in documents and storage
//! columns; only the tagged text and binary encodings of
//! [`NullableOmittable`] keep them apart.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;

mod convert;

mod error;
pub use error::Error;

mod kind;
pub use kind::*;

mod opt;
pub use opt::*;

mod state;
pub use state::State;

pub use tristate_value::{self as value, Decode, Encode, Primitive};
