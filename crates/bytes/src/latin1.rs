//! The fixed 8-bit transform between text and bytes.

use bytes::Bytes;

use crate::error::ByteError;

/// Encodes a text literal as an immutable binary buffer.
///
/// Each code point in `0..=255` becomes the byte of the same value. Any
/// higher code point fails with [`ByteError::Encoding`].
///
/// # Example
///
/// ```
/// use cryptkit_bytes::text_to_bytes;
///
/// let bytes = text_to_bytes("ABC").unwrap();
/// assert_eq!(&bytes[..], &[0x41, 0x42, 0x43]);
/// assert!(text_to_bytes("\u{2603}").is_err());
/// ```
pub fn text_to_bytes(s: &str) -> Result<Bytes, ByteError> {
    let mut out = Vec::with_capacity(s.len());
    for ch in s.chars() {
        let code = ch as u32;
        if code > 0xFF {
            return Err(ByteError::Encoding(code));
        }
        out.push(code as u8);
    }
    Ok(Bytes::from(out))
}

/// Decodes a binary buffer back into text.
///
/// The inverse transform is total: every byte value `N` becomes code point
/// `N`.
///
/// # Example
///
/// ```
/// use cryptkit_bytes::to_text;
///
/// assert_eq!(to_text(&[0x41, 0x42, 0x43]), "ABC");
/// assert_eq!(to_text(&[0xFF]), "\u{00FF}");
/// ```
pub fn to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_range() {
        assert_eq!(&text_to_bytes("hello").unwrap()[..], b"hello");
        assert_eq!(to_text(b"hello"), "hello");
    }

    #[test]
    fn test_high_byte() {
        assert_eq!(&text_to_bytes("\u{00FF}").unwrap()[..], &[0xFF]);
        assert_eq!(to_text(&[0xA9]), "\u{00A9}");
    }

    #[test]
    fn test_out_of_range_code_point() {
        assert_eq!(text_to_bytes("\u{0100}"), Err(ByteError::Encoding(0x100)));
        assert_eq!(text_to_bytes("a\u{2603}"), Err(ByteError::Encoding(0x2603)));
    }

    #[test]
    fn test_empty() {
        assert!(text_to_bytes("").unwrap().is_empty());
        assert_eq!(to_text(&[]), "");
    }
}
