//! Integer to one-byte buffer conversions.

use bytes::Bytes;

use crate::error::ByteError;

/// Produces a one-byte immutable buffer holding `code`.
///
/// `code` must be in `0..=255`; anything else fails with
/// [`ByteError::Range`]. The parameter is wider than `u8` so out-of-range
/// values surface as errors rather than truncating at the call site.
///
/// # Example
///
/// ```
/// use cryptkit_bytes::single_byte;
///
/// assert_eq!(&single_byte(0x41).unwrap()[..], b"A");
/// assert!(single_byte(256).is_err());
/// assert!(single_byte(-1).is_err());
/// ```
pub fn single_byte(code: i64) -> Result<Bytes, ByteError> {
    if !(0..=255).contains(&code) {
        return Err(ByteError::Range(code));
    }
    Ok(Bytes::from(vec![code as u8]))
}

/// The integer code of a single buffer element.
///
/// Indexing a binary buffer already yields the element's byte value, so
/// this is the identity; it is the named inverse of [`single_byte`].
#[inline]
pub const fn element_code(element: u8) -> u8 {
    element
}
