//! Byte order conversion for 4-byte payload values.
//!
//! FITS stores every numeric value big-endian. Column data is converted once
//! at registration so that writing the payload is a plain byte copy.

use std::sync::OnceLock;

/// Width in bytes of every supported element.
pub const WORD_LEN: usize = 4;

/// Byte order of a 4-byte word in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least significant byte first.
    Little,
    /// Most significant byte first (FITS, network order).
    Big,
}

impl ByteOrder {
    /// Byte order of the running host.
    ///
    /// Determined once per process from the stored bytes of the 32-bit value `1`.
    #[must_use]
    pub fn host() -> Self {
        static HOST: OnceLock<ByteOrder> = OnceLock::new();
        *HOST.get_or_init(|| {
            if 1u32.to_ne_bytes()[0] == 1 {
                ByteOrder::Little
            } else {
                ByteOrder::Big
            }
        })
    }
}

/// Reverse the bytes of every 4-byte element in `buf` when `order` is little-endian.
///
/// A trailing partial element is left untouched.
pub fn swap4_in_place(buf: &mut [u8], order: ByteOrder) {
    if order == ByteOrder::Big {
        return;
    }
    for word in buf.chunks_exact_mut(WORD_LEN) {
        word.reverse();
    }
}

/// A 4-byte numeric value that can be stored in a FITS payload.
pub trait BigEndianWord: Copy {
    /// Native in-memory bytes of the value.
    fn native_bytes(self) -> [u8; WORD_LEN];
}

impl BigEndianWord for i32 {
    fn native_bytes(self) -> [u8; WORD_LEN] {
        self.to_ne_bytes()
    }
}

impl BigEndianWord for f32 {
    fn native_bytes(self) -> [u8; WORD_LEN] {
        self.to_ne_bytes()
    }
}

/// Copy `values` into a contiguous big-endian byte buffer.
#[must_use]
pub fn encode_big_endian<T: BigEndianWord>(values: &[T]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(values.len() * WORD_LEN);
    for value in values {
        buf.extend_from_slice(&value.native_bytes());
    }
    swap4_in_place(&mut buf, ByteOrder::host());
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_matches_target() {
        let expected = if cfg!(target_endian = "little") {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        };
        assert_eq!(ByteOrder::host(), expected);
    }

    #[test]
    fn test_swap_little() {
        let mut buf = [1, 2, 3, 4, 5, 6, 7, 8];
        swap4_in_place(&mut buf, ByteOrder::Little);
        assert_eq!(buf, [4, 3, 2, 1, 8, 7, 6, 5]);
    }

    #[test]
    fn test_swap_big_is_noop() {
        let mut buf = [1, 2, 3, 4];
        swap4_in_place(&mut buf, ByteOrder::Big);
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn test_swap_leaves_partial_tail() {
        let mut buf = [1, 2, 3, 4, 9, 9];
        swap4_in_place(&mut buf, ByteOrder::Little);
        assert_eq!(buf, [4, 3, 2, 1, 9, 9]);
    }

    #[test]
    fn test_encode_int() {
        assert_eq!(encode_big_endian(&[666i32]), vec![0x00, 0x00, 0x02, 0x9a]);
        assert_eq!(encode_big_endian(&[-1i32]), vec![0xff; 4]);
    }

    #[test]
    fn test_encode_float() {
        // 333.0 = 0x43A68000
        assert_eq!(encode_big_endian(&[333.0f32]), vec![0x43, 0xa6, 0x80, 0x00]);
        assert_eq!(
            encode_big_endian(&[1.0f32, -2.0]),
            vec![0x3f, 0x80, 0, 0, 0xc0, 0, 0, 0]
        );
    }

    #[test]
    fn test_encode_empty() {
        assert!(encode_big_endian::<i32>(&[]).is_empty());
    }
}
