//! Cursor Decode/Encode di atas buffer milik caller
//!
//! Semua field little-endian, tanpa padding, tanpa alignment.
//! Cursor hanya maju setelah operasi sukses, persis sebanyak byte yang
//! dibaca/ditulis. Tidak ada alokasi.
//!
//! Dua jenis operasi:
//! - Unchecked (`decode_32`, `encode_64`, ...): caller sudah memastikan ruang
//!   cukup. Overrun = panic dari slice bounds, bukan UB.
//! - Checked (`*_safe`): cek dulu via [`DecodeCursor::need`], gagal dengan
//!   [`WireError::Truncated`] dan cursor tidak bergerak.

use crate::error::{WireError, WireResult};

/// Bounds-checker bersama untuk kedua arah cursor.
///
/// `pos + n > end` tanpa risiko overflow.
#[inline(always)]
fn check(pos: usize, end: usize, n: usize) -> WireResult<()> {
    let remaining = end - pos;
    if n > remaining {
        return Err(truncated(pos, n, remaining));
    }
    Ok(())
}

#[cold]
#[inline(never)]
fn truncated(offset: usize, needed: usize, remaining: usize) -> WireError {
    tracing::trace!(offset, needed, remaining, "wire bounds check failed");
    WireError::Truncated {
        offset,
        needed,
        remaining,
    }
}

/// Zero-copy decode cursor
///
/// `Copy` supaya composite decoder bisa mencoba decode di salinan
/// dan commit hanya jika semua langkah sukses.
#[derive(Debug, Clone, Copy)]
pub struct DecodeCursor<'a> {
    buf: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> DecodeCursor<'a> {
    /// Cursor di awal buffer, end = akhir buffer
    #[inline(always)]
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            end: buf.len(),
        }
    }

    /// Cursor dengan end (exclusive) yang lebih sempit dari buffer.
    ///
    /// `end` di-clamp ke `buf.len()`.
    #[inline(always)]
    pub fn with_end(buf: &'a [u8], end: usize) -> Self {
        Self {
            buf,
            pos: 0,
            end: end.min(buf.len()),
        }
    }

    /// Posisi byte berikutnya yang belum dibaca
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Exclusive end
    #[inline(always)]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Remaining bytes
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    /// Bytes yang belum dibaca, tanpa memajukan cursor
    #[inline(always)]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..self.end]
    }

    /// Bounds check: gagal jika kurang dari `n` byte tersisa.
    ///
    /// Tidak pernah memajukan cursor.
    #[inline(always)]
    pub fn need(&self, n: usize) -> WireResult<()> {
        check(self.pos, self.end, n)
    }

    #[inline(always)]
    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[self.pos..self.end][..N]);
        self.pos += N;
        out
    }

    /// # Panics
    /// Jika cursor sudah di end.
    #[inline(always)]
    pub fn decode_8(&mut self) -> u8 {
        u8::from_le_bytes(self.take())
    }

    /// # Panics
    /// Jika kurang dari 2 byte tersisa.
    #[inline(always)]
    pub fn decode_16(&mut self) -> u16 {
        u16::from_le_bytes(self.take())
    }

    /// # Panics
    /// Jika kurang dari 4 byte tersisa.
    #[inline(always)]
    pub fn decode_32(&mut self) -> u32 {
        u32::from_le_bytes(self.take())
    }

    /// # Panics
    /// Jika kurang dari 8 byte tersisa.
    #[inline(always)]
    pub fn decode_64(&mut self) -> u64 {
        u64::from_le_bytes(self.take())
    }

    #[inline(always)]
    pub fn decode_8_safe(&mut self) -> WireResult<u8> {
        self.need(1)?;
        Ok(self.decode_8())
    }

    #[inline(always)]
    pub fn decode_16_safe(&mut self) -> WireResult<u16> {
        self.need(2)?;
        Ok(self.decode_16())
    }

    #[inline(always)]
    pub fn decode_32_safe(&mut self) -> WireResult<u32> {
        self.need(4)?;
        Ok(self.decode_32())
    }

    #[inline(always)]
    pub fn decode_64_safe(&mut self) -> WireResult<u64> {
        self.need(8)?;
        Ok(self.decode_64())
    }

    /// Copy `dst.len()` byte ke `dst`, lalu maju.
    ///
    /// # Panics
    /// Jika kurang dari `dst.len()` byte tersisa.
    #[inline(always)]
    pub fn decode_copy(&mut self, dst: &mut [u8]) {
        let n = dst.len();
        dst.copy_from_slice(&self.buf[self.pos..self.end][..n]);
        self.pos += n;
    }

    /// Checked copy. `dst` tidak disentuh jika gagal.
    #[inline(always)]
    pub fn decode_copy_safe(&mut self, dst: &mut [u8]) -> WireResult<()> {
        self.need(dst.len())?;
        self.decode_copy(dst);
        Ok(())
    }

    /// Pinjam `n` byte langsung dari buffer (ZERO-COPY!)
    #[inline(always)]
    pub fn decode_slice_safe(&mut self, n: usize) -> WireResult<&'a [u8]> {
        self.need(n)?;
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..self.pos])
    }
}

/// Encode cursor di atas buffer pre-allocated milik caller
///
/// Tidak pernah grow. Sizing adalah tanggung jawab caller.
#[derive(Debug)]
pub struct EncodeCursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
    end: usize,
}

impl<'a> EncodeCursor<'a> {
    #[inline(always)]
    pub fn new(buf: &'a mut [u8]) -> Self {
        let end = buf.len();
        Self { buf, pos: 0, end }
    }

    /// Sama seperti [`DecodeCursor::with_end`]: `end` di-clamp ke `buf.len()`.
    #[inline(always)]
    pub fn with_end(buf: &'a mut [u8], end: usize) -> Self {
        let end = end.min(buf.len());
        Self { buf, pos: 0, end }
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Available space in buffer
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    /// Bytes yang sudah ditulis
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Bounds check, sama semantiknya dengan sisi decode
    #[inline(always)]
    pub fn need(&self, n: usize) -> WireResult<()> {
        check(self.pos, self.end, n)
    }

    #[inline(always)]
    fn put<const N: usize>(&mut self, bytes: [u8; N]) {
        self.buf[self.pos..self.end][..N].copy_from_slice(&bytes);
        self.pos += N;
    }

    /// # Panics
    /// Jika cursor sudah di end.
    #[inline(always)]
    pub fn encode_8(&mut self, v: u8) {
        self.put(v.to_le_bytes());
    }

    /// # Panics
    /// Jika kurang dari 2 byte tersisa.
    #[inline(always)]
    pub fn encode_16(&mut self, v: u16) {
        self.put(v.to_le_bytes());
    }

    /// # Panics
    /// Jika kurang dari 4 byte tersisa.
    #[inline(always)]
    pub fn encode_32(&mut self, v: u32) {
        self.put(v.to_le_bytes());
    }

    /// # Panics
    /// Jika kurang dari 8 byte tersisa.
    #[inline(always)]
    pub fn encode_64(&mut self, v: u64) {
        self.put(v.to_le_bytes());
    }

    /// Copy raw bytes ke buffer, lalu maju.
    ///
    /// # Panics
    /// Jika kurang dari `src.len()` byte tersisa.
    #[inline(always)]
    pub fn encode_copy(&mut self, src: &[u8]) {
        let n = src.len();
        self.buf[self.pos..self.end][..n].copy_from_slice(src);
        self.pos += n;
    }

    /// Checked copy. Buffer tidak disentuh jika gagal.
    #[inline(always)]
    pub fn encode_copy_safe(&mut self, src: &[u8]) -> WireResult<()> {
        self.need(src.len())?;
        self.encode_copy(src);
        Ok(())
    }
}
