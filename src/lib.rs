//! cephwire - Little-Endian Cursor Codec
//!
//! Arsitektur:
//! - Cursor: Posisi + end di atas buffer pre-allocated milik caller
//! - Fixed-width: u8/u16/u32/u64 little-endian, unchecked dan checked
//! - Composite: Length-prefixed string, filepath, timestamp record
//! - Error: Decode gagal = `WireError` (recoverable), encode undersized = panic

pub mod core;
pub mod error;
pub mod protocol;

pub use crate::core::{DecodeCursor, EncodeCursor, MappedRegion};
pub use crate::error::{WireError, WireResult};
