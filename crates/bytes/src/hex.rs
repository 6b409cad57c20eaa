//! Hexadecimal display form for binary buffers.

use bytes::Bytes;
use thiserror::Error;

/// Lowercase hex alphabet.
const DIGITS: &[u8; 16] = b"0123456789abcdef";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// The input length is odd, so the final digit has no pair.
    #[error("hex string has odd length: {0}")]
    OddLength(usize),
    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

/// Encodes bytes as a lowercase hexadecimal string.
///
/// # Example
///
/// ```
/// use cryptkit_bytes::to_hex;
///
/// assert_eq!(to_hex(&[0xDE, 0xAD]), "dead");
/// assert_eq!(to_hex(&[]), "");
/// ```
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(DIGITS[(b >> 4) as usize] as char);
        out.push(DIGITS[(b & 0x0F) as usize] as char);
    }
    out
}

/// Decodes a hexadecimal string into an immutable binary buffer.
///
/// Accepts both lowercase and uppercase digits. Positions in errors are
/// byte offsets into the input.
///
/// # Example
///
/// ```
/// use cryptkit_bytes::from_hex;
///
/// let bytes = from_hex("DEad").unwrap();
/// assert_eq!(&bytes[..], &[0xDE, 0xAD]);
/// assert!(from_hex("abc").is_err());
/// ```
pub fn from_hex(s: &str) -> Result<Bytes, HexError> {
    let raw = s.as_bytes();
    if raw.len() % 2 != 0 {
        return Err(HexError::OddLength(raw.len()));
    }
    let mut out = Vec::with_capacity(raw.len() / 2);
    for (i, pair) in raw.chunks_exact(2).enumerate() {
        let hi = digit_value(pair[0]).ok_or(HexError::InvalidDigit {
            digit: pair[0] as char,
            position: i * 2,
        })?;
        let lo = digit_value(pair[1]).ok_or(HexError::InvalidDigit {
            digit: pair[1] as char,
            position: i * 2 + 1,
        })?;
        out.push((hi << 4) | lo);
    }
    Ok(Bytes::from(out))
}

fn digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let data = [0x00, 0x01, 0x7F, 0x80, 0xFF];
        assert_eq!(to_hex(&data), "00017f80ff");
        assert_eq!(&from_hex("00017f80ff").unwrap()[..], &data);
    }

    #[test]
    fn test_mixed_case() {
        assert_eq!(&from_hex("aBcDeF").unwrap()[..], &[0xAB, 0xCD, 0xEF]);
    }

    #[test]
    fn test_odd_length() {
        assert_eq!(from_hex("abc"), Err(HexError::OddLength(3)));
    }

    #[test]
    fn test_invalid_digit() {
        assert_eq!(
            from_hex("0g"),
            Err(HexError::InvalidDigit {
                digit: 'g',
                position: 1
            })
        );
    }
}
