//! Payload conversion for tri-state optional values.
//!
//! Optional containers hand their present payloads to this crate when
//! they need to be written somewhere else: into a storage column, or into
//! a text or binary representation.
//!
//! Payload types opt into conversions through the [`Encode`] and
//! [`Decode`] traits. Every method on them is an optional capability
//! with a fallback, so a type only overrides what it actually supports
//! and the free functions in this crate pick the first capability that
//! applies.
//!
//! # Storage
//!
//! [`to_storage_value`] turns a payload into a [`Primitive`], the small
//! closed set of shapes a generic key/value column understands.
//! [`from_storage_value`] goes the other way.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod capability;
pub use capability::*;

mod engine;
pub use engine::*;

mod error;
pub use error::Error;

mod impls;

mod primitive;
pub use primitive::*;

mod shape;
pub use shape::Shape;

// Re-exported so payload implementations can name the passthrough type.
pub use time::OffsetDateTime;
