//! Byte normalization error type.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ByteError {
    /// A textual value contained a code point above U+00FF.
    #[error("code point U+{0:04X} is not representable as a single byte")]
    Encoding(u32),
    /// An integer outside `0..=255` where a single byte value is required.
    #[error("byte value out of range: {0}")]
    Range(i64),
}
