//! Protocol Layer: Composite records di atas cursor
//!
//! Prinsip desain:
//! - Length-prefixed: `[len:u32 LE][bytes]` untuk string dan path
//! - Fixed-size records: Timestamp selalu 8 bytes, tanpa prefix
//! - Encode fatal, decode recoverable

mod string;
mod timespec;

pub use string::{
    decode_filepath_safe, decode_string_safe, encode_filepath, encode_string,
    filepath_encoded_len, string_encoded_len, FilePath,
};
pub use timespec::{
    decode_timespec, encode_timespec, Timespec, WireTimespec, TIMESPEC_ENCODED_LEN,
};
