//! Error types untuk decode-side failures
//!
//! Hanya satu kelas error yang recoverable: input terpotong (truncated).
//! Sizing bug di sisi encoder BUKAN error di sini, melainkan panic.

/// Recoverable wire error.
///
/// Dikembalikan oleh semua operasi `*_safe`. Cursor tidak bergerak
/// ketika error ini dikembalikan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// Buffer tidak punya cukup byte untuk operasi yang diminta.
    #[error("truncated input: need {needed} bytes at offset {offset}, have {remaining}")]
    Truncated {
        /// Posisi cursor saat check gagal.
        offset: usize,
        /// Jumlah byte yang diminta.
        needed: usize,
        /// Sisa byte antara cursor dan end.
        remaining: usize,
    },
}

impl WireError {
    /// Jumlah byte yang kurang untuk menyelesaikan operasi
    pub fn shortfall(&self) -> usize {
        match *self {
            WireError::Truncated {
                needed, remaining, ..
            } => needed.saturating_sub(remaining),
        }
    }
}

/// Result type untuk operasi decode
pub type WireResult<T> = Result<T, WireError>;
