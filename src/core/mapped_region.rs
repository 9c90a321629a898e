//! Memory-Mapped Region sebagai buffer milik caller
//!
//! Region berukuran tetap di-mmap dari file. Cursor bekerja langsung
//! di atas page cache:
//! - Zero-copy: encode/decode langsung ke/dari mmap region
//! - Ukuran tetap: region tidak pernah grow, sizing di tangan caller
//! - Persistence: isi region tersimpan ke file setelah `flush`

use memmap2::{MmapMut, MmapOptions};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use super::cursor::{DecodeCursor, EncodeCursor};

/// Mmap-backed byte region dengan panjang tetap
pub struct MappedRegion {
    mmap: MmapMut,
}

impl MappedRegion {
    /// Membuat atau membuka region
    ///
    /// # Arguments
    /// * `path` - Path ke file backing
    /// * `len` - Panjang region dalam bytes (harus > 0)
    pub fn create<P: AsRef<Path>>(path: P, len: usize) -> io::Result<Self> {
        if len == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "mapped region length must be non-zero",
            ));
        }

        // Isi lama dipertahankan supaya region bisa dibuka ulang
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path.as_ref())?;

        file.set_len(len as u64)?;

        // SAFETY: File dibuka read/write dan panjangnya sudah di-set.
        // Modifikasi file dari proses lain di luar kontrak region ini.
        let mmap = unsafe { MmapOptions::new().len(len).map_mut(&file)? };

        tracing::debug!(path = %path.as_ref().display(), len, "mapped region opened");

        Ok(Self { mmap })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[u8] {
        &self.mmap
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.mmap
    }

    /// Decode cursor di atas seluruh region
    #[inline(always)]
    pub fn decoder(&self) -> DecodeCursor<'_> {
        DecodeCursor::new(&self.mmap)
    }

    /// Encode cursor di atas seluruh region
    #[inline(always)]
    pub fn encoder(&mut self) -> EncodeCursor<'_> {
        EncodeCursor::new(&mut self.mmap)
    }

    /// Sinkronkan isi region ke file
    pub fn flush(&self) -> io::Result<()> {
        self.mmap.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_region_encode_decode() {
        let path = "test_region_basic.dat";

        {
            let mut region = MappedRegion::create(path, 64).unwrap();
            assert_eq!(region.len(), 64);

            let mut enc = region.encoder();
            enc.encode_32(0xDEAD_BEEF);
            enc.encode_copy(b"Hello, Ceph!");
            assert_eq!(enc.position(), 16);

            let mut dec = region.decoder();
            assert_eq!(dec.decode_32_safe().unwrap(), 0xDEAD_BEEF);
            assert_eq!(dec.decode_slice_safe(12).unwrap(), b"Hello, Ceph!");
        }

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_region_persistence() {
        let path = "test_region_persistence.dat";

        {
            let mut region = MappedRegion::create(path, 32).unwrap();
            region.encoder().encode_64(42);
            region.flush().unwrap();
        }

        // Reopen and verify
        {
            let region = MappedRegion::create(path, 32).unwrap();
            assert_eq!(region.decoder().decode_64_safe().unwrap(), 42);
        }

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_zero_length_rejected() {
        let err = MappedRegion::create("test_region_empty.dat", 0)
            .err()
            .unwrap();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
