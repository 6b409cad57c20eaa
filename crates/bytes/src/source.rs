//! Canonicalization of heterogeneous byte-holding inputs.

use bytes::{Bytes, BytesMut};

use crate::error::ByteError;
use crate::latin1::text_to_bytes;

/// The input shapes accepted by [`to_bytes`].
///
/// Buffers come in two kinds: [`Bytes`] is immutable (a [`Bytes::slice`]
/// view over one is still a `Bytes`, so views classify as immutable too),
/// and [`BytesMut`] is modifiable in place. Textual values and plain byte
/// sequences are not buffers of either kind.
#[derive(Debug, Clone)]
pub enum ByteSource<'a> {
    /// A textual value.
    Text(&'a str),
    /// An immutable buffer, or a read-only view over one.
    Buf(Bytes),
    /// A mutable buffer, borrowed from the caller.
    Mut(&'a BytesMut),
    /// A sequence of byte values.
    Codes(&'a [u8]),
}

impl ByteSource<'_> {
    /// True iff the value is an immutable binary buffer or a read-only
    /// view over one.
    pub fn is_immutable(&self) -> bool {
        matches!(self, ByteSource::Buf(_))
    }

    /// True iff the value is a mutable binary buffer.
    pub fn is_mutable(&self) -> bool {
        matches!(self, ByteSource::Mut(_))
    }
}

impl<'a> From<&'a str> for ByteSource<'a> {
    fn from(s: &'a str) -> Self {
        ByteSource::Text(s)
    }
}

impl<'a> From<Bytes> for ByteSource<'a> {
    fn from(buf: Bytes) -> Self {
        ByteSource::Buf(buf)
    }
}

impl<'a> From<&'a BytesMut> for ByteSource<'a> {
    fn from(buf: &'a BytesMut) -> Self {
        ByteSource::Mut(buf)
    }
}

impl<'a> From<&'a [u8]> for ByteSource<'a> {
    fn from(codes: &'a [u8]) -> Self {
        ByteSource::Codes(codes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteSource<'a> {
    fn from(codes: &'a [u8; N]) -> Self {
        ByteSource::Codes(codes)
    }
}

/// Canonicalizes heterogeneous input into an immutable binary buffer.
///
/// - An immutable buffer passes through unchanged; the returned handle
///   shares the source storage, no copy is made.
/// - A textual value goes through the fixed 8-bit transform and fails with
///   [`ByteError::Encoding`] on a code point above 255.
/// - A mutable buffer or byte sequence is copied element-wise into a fresh
///   buffer that does not alias the source.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use cryptkit_bytes::to_bytes;
///
/// assert_eq!(&to_bytes("ABC").unwrap()[..], &[0x41, 0x42, 0x43]);
///
/// let canonical = Bytes::from_static(b"xyz");
/// assert_eq!(to_bytes(canonical.clone()).unwrap(), canonical);
/// ```
pub fn to_bytes<'a>(src: impl Into<ByteSource<'a>>) -> Result<Bytes, ByteError> {
    match src.into() {
        ByteSource::Text(s) => text_to_bytes(s),
        ByteSource::Buf(buf) => Ok(buf),
        ByteSource::Mut(buf) => Ok(Bytes::copy_from_slice(buf)),
        ByteSource::Codes(codes) => Ok(Bytes::copy_from_slice(codes)),
    }
}
