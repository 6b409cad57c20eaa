//! Byte normalization utilities for cryptkit.
//!
//! This crate is the boundary between textual values and binary buffers for
//! the rest of the toolkit. Higher-level routines always deal in immutable
//! binary buffers ([`bytes::Bytes`]); anything that arrives in another shape
//! (a text literal, a mutable buffer, a plain sequence of byte values) is
//! funneled through [`to_bytes`] first.
//!
//! Text maps to bytes through a fixed 8-bit transform: code point `N`
//! becomes byte `N`, valid only for code points in `0..=255` (Latin-1).
//!
//! # Overview
//!
//! - [`to_bytes`] - Canonicalizes any [`ByteSource`] into an immutable buffer
//! - [`to_text`] - Inverse 8-bit transform, bytes back to text
//! - [`text_to_bytes`] - Encodes a text literal as bytes
//! - [`single_byte`] / [`element_code`] - Integer to one-byte buffer and back
//! - [`copy_range`] - Independently owned copy of a sub-range
//! - [`to_hex`] / [`from_hex`] - Hexadecimal display form
//!
//! # Example
//!
//! ```
//! use cryptkit_bytes::{to_bytes, to_text};
//!
//! let key = to_bytes("secret").unwrap();
//! assert_eq!(&key[..], b"secret");
//! assert_eq!(to_text(&key), "secret");
//! ```

mod copy;
mod error;
mod hex;
mod latin1;
mod single;
mod source;

pub use copy::copy_range;
pub use error::ByteError;
pub use hex::{from_hex, to_hex, HexError};
pub use latin1::{text_to_bytes, to_text};
pub use single::{element_code, single_byte};
pub use source::{to_bytes, ByteSource};
