//! Owned sub-range copies of byte containers.

use bytes::Bytes;

/// Copies the half-open range `[start, end)` of a byte container into an
/// independently owned immutable buffer.
///
/// Bounds follow slice semantics: a bound past the container length clamps
/// to the length, and `start >= end` yields an empty buffer. The call never
/// panics.
///
/// The returned buffer owns its storage; it never shares the source
/// allocation, so later mutations of the source are not observable in the
/// copy and vice versa.
///
/// # Example
///
/// ```
/// use cryptkit_bytes::copy_range;
///
/// let data = [0x10, 0x20, 0x30, 0x40];
/// assert_eq!(&copy_range(0, 2, &data)[..], &[0x10, 0x20]);
/// assert_eq!(&copy_range(2, 100, &data)[..], &[0x30, 0x40]);
/// assert!(copy_range(3, 1, &data).is_empty());
/// ```
pub fn copy_range(start: usize, end: usize, seq: &[u8]) -> Bytes {
    let len = seq.len();
    let start = start.min(len);
    let end = end.min(len);
    if start >= end {
        return Bytes::new();
    }
    Bytes::copy_from_slice(&seq[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy() {
        let original = vec![1, 2, 3];
        let duplicate = copy_range(0, 3, &original);
        assert_eq!(&duplicate[..], &original[..]);
        assert_ne!(original.as_ptr(), duplicate.as_ptr());
    }

    #[test]
    fn test_clamping() {
        let data = [1u8, 2, 3];
        assert_eq!(&copy_range(1, 100, &data)[..], &[2, 3]);
        assert_eq!(&copy_range(100, 200, &data)[..], b"");
        assert_eq!(&copy_range(2, 2, &data)[..], b"");
    }

    #[test]
    fn test_view_copy_does_not_alias() {
        let buf = Bytes::from_static(b"abcdef");
        let view = buf.slice(1..5);
        let copy = copy_range(0, 2, &view);
        assert_eq!(&copy[..], b"bc");
        assert_ne!(copy.as_ptr(), view.as_ptr());
    }
}
