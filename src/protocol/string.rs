//! Length-prefixed string dan filepath record
//!
//! Layout:
//! - String:   `[len:u32 LE][bytes:len]`
//! - Filepath: `[ino:u64 LE][len:u32 LE][bytes:len]`
//!
//! Encoder: sizing bug di caller = panic (fatal). Caller adalah producer
//! dan sudah harus tahu ukuran persisnya lewat `*_encoded_len`.
//!
//! Decoder: input dari luar, jadi dua kali bounds check (prefix lalu
//! payload) dan error recoverable. Cursor tidak bergerak jika gagal.

use crate::core::{DecodeCursor, EncodeCursor};
use crate::error::WireResult;

const LEN_PREFIX: usize = 4;
const INO_LEN: usize = 8;

/// Ukuran string record di wire
#[inline(always)]
pub const fn string_encoded_len(len: usize) -> usize {
    LEN_PREFIX + len
}

/// Ukuran filepath record di wire
#[inline(always)]
pub const fn filepath_encoded_len(len: usize) -> usize {
    INO_LEN + LEN_PREFIX + len
}

/// Filepath hasil decode, payload dipinjam dari buffer (zero-copy)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilePath<'a> {
    /// Inode / node reference
    pub ino: u64,
    /// Path text, kosong jika path absent
    pub path: &'a [u8],
}

impl<'a> FilePath<'a> {
    /// Path sebagai UTF-8, `None` jika bukan UTF-8 valid
    pub fn path_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.path).ok()
    }
}

#[inline(always)]
fn wire_len(len: usize) -> u32 {
    match u32::try_from(len) {
        Ok(len) => len,
        Err(_) => panic!("payload of {len} bytes does not fit a u32 length prefix"),
    }
}

#[track_caller]
#[inline(always)]
fn assert_room(cursor: &EncodeCursor<'_>, required: usize) {
    let available = cursor.remaining();
    assert!(
        required <= available,
        "encode buffer undersized: need {required} bytes at offset {}, have {available}",
        cursor.position()
    );
}

/// Encode filepath record.
///
/// `path = None` di-encode sebagai string kosong.
///
/// # Panics
/// Jika sisa buffer kurang dari `8 + 4 + len`, atau `len` > `u32::MAX`.
/// Ini programming error di caller, bukan data error.
#[track_caller]
pub fn encode_filepath<P: AsRef<[u8]> + ?Sized>(
    cursor: &mut EncodeCursor<'_>,
    ino: u64,
    path: Option<&P>,
) {
    let path: &[u8] = match path {
        Some(p) => p.as_ref(),
        None => &[],
    };
    let len = wire_len(path.len());
    assert_room(cursor, filepath_encoded_len(path.len()));

    cursor.encode_64(ino);
    cursor.encode_32(len);
    if !path.is_empty() {
        cursor.encode_copy(path);
    }
}

/// Encode string record. Tidak butuh null terminator.
///
/// # Panics
/// Jika sisa buffer kurang dari `4 + len`, atau `len` > `u32::MAX`.
#[track_caller]
pub fn encode_string(cursor: &mut EncodeCursor<'_>, s: &[u8]) {
    let len = wire_len(s.len());
    assert_room(cursor, string_encoded_len(s.len()));

    cursor.encode_32(len);
    if !s.is_empty() {
        cursor.encode_copy(s);
    }
}

/// Decode string record dari input luar (zero-copy)
pub fn decode_string_safe<'a>(cursor: &mut DecodeCursor<'a>) -> WireResult<&'a [u8]> {
    // Decode di salinan, commit hanya jika kedua check lolos
    let mut probe = *cursor;
    let len = probe.decode_32_safe()?;
    let bytes = probe.decode_slice_safe(len as usize)?;
    *cursor = probe;
    Ok(bytes)
}

/// Decode filepath record dari input luar (zero-copy)
pub fn decode_filepath_safe<'a>(cursor: &mut DecodeCursor<'a>) -> WireResult<FilePath<'a>> {
    let mut probe = *cursor;
    probe.need(INO_LEN + LEN_PREFIX)?;
    let ino = probe.decode_64();
    let len = probe.decode_32();
    let path = probe.decode_slice_safe(len as usize)?;
    *cursor = probe;
    Ok(FilePath { ino, path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WireError;

    #[test]
    fn test_encode_string_layout() {
        let mut buf = [0xFFu8; 16];
        let mut enc = EncodeCursor::new(&mut buf);
        encode_string(&mut enc, b"ceph");
        assert_eq!(enc.as_bytes(), &[4, 0, 0, 0, b'c', b'e', b'p', b'h']);
        assert_eq!(enc.position(), string_encoded_len(4));
    }

    #[test]
    fn test_encode_empty_string() {
        let mut buf = [0xFFu8; 4];
        let mut enc = EncodeCursor::new(&mut buf);
        encode_string(&mut enc, b"");
        assert_eq!(enc.as_bytes(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_filepath_absent_path() {
        let mut buf = [0xFFu8; 12];
        let mut enc = EncodeCursor::new(&mut buf);
        encode_filepath::<str>(&mut enc, 7, None);
        assert_eq!(enc.as_bytes(), &[7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_filepath_roundtrip() {
        let mut buf = [0u8; 32];
        let mut enc = EncodeCursor::new(&mut buf);
        encode_filepath(&mut enc, 42, Some("/a/b"));
        let written = enc.position();
        assert_eq!(written, filepath_encoded_len(4));

        let mut dec = DecodeCursor::with_end(&buf, written);
        let fp = decode_filepath_safe(&mut dec).unwrap();
        assert_eq!(fp.ino, 42);
        assert_eq!(fp.path_str(), Some("/a/b"));
        assert!(dec.is_empty());
    }

    #[test]
    #[should_panic(expected = "encode buffer undersized")]
    fn test_encode_string_undersized_panics() {
        let mut buf = [0u8; 7];
        let mut enc = EncodeCursor::new(&mut buf);
        encode_string(&mut enc, b"ceph");
    }

    #[test]
    #[should_panic(expected = "encode buffer undersized")]
    fn test_encode_filepath_undersized_panics() {
        let mut buf = [0u8; 15];
        let mut enc = EncodeCursor::new(&mut buf);
        encode_filepath(&mut enc, 1, Some(b"/abc".as_slice()));
    }

    #[test]
    fn test_undersized_panic_leaves_buffer_untouched() {
        let mut buf = [0xEEu8; 6];
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut enc = EncodeCursor::new(&mut buf);
            encode_string(&mut enc, b"abc");
        }));
        assert!(result.is_err());
        assert_eq!(buf, [0xEE; 6]);
    }

    #[test]
    fn test_decode_string_truncated_prefix() {
        let buf = [4u8, 0, 0];
        let mut dec = DecodeCursor::new(&buf);
        assert_eq!(
            decode_string_safe(&mut dec),
            Err(WireError::Truncated {
                offset: 0,
                needed: 4,
                remaining: 3
            })
        );
        assert_eq!(dec.position(), 0);
    }

    #[test]
    fn test_decode_string_truncated_payload_restores_cursor() {
        // Length bilang 10, payload cuma 3
        let buf = [10u8, 0, 0, 0, b'a', b'b', b'c'];
        let mut dec = DecodeCursor::new(&buf);
        let err = decode_string_safe(&mut dec).unwrap_err();
        assert_eq!(
            err,
            WireError::Truncated {
                offset: 4,
                needed: 10,
                remaining: 3
            }
        );
        assert_eq!(dec.position(), 0);
    }

    #[test]
    fn test_decode_filepath_huge_length() {
        let mut buf = [0u8; 16];
        let mut enc = EncodeCursor::new(&mut buf);
        enc.encode_64(9);
        enc.encode_32(u32::MAX);
        let mut dec = DecodeCursor::new(&buf);
        assert!(decode_filepath_safe(&mut dec).is_err());
        assert_eq!(dec.position(), 0);
    }
}
