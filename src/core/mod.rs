//! Core module: Cursor primitives di atas buffer milik caller
//!
//! Prinsip desain:
//! - Zero-Copy: Decode meminjam langsung dari buffer
//! - No-Allocation: Cursor tidak pernah grow atau alokasi
//! - Explicit bounds: Checked ops gagal tanpa memajukan cursor

mod cursor;
mod mapped_region;

pub use cursor::{DecodeCursor, EncodeCursor};
pub use mapped_region::MappedRegion;
