//! Timestamp record: `[sec:u32 LE][nsec:u32 LE]`, fixed 8 bytes
//!
//! Tidak ada length prefix. Konversi wire <-> host per field,
//! masing-masing field di-swap endianness-nya secara independen.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::core::{DecodeCursor, EncodeCursor};
use crate::error::WireResult;

/// Ukuran timestamp record di wire
pub const TIMESPEC_ENCODED_LEN: usize = 8;

const NSEC_PER_SEC: u32 = 1_000_000_000;

/// Timestamp dalam representasi host
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timespec {
    /// Detik sejak epoch
    pub sec: u32,
    /// Sisa sub-detik dalam nanoseconds
    pub nsec: u32,
}

impl Timespec {
    #[inline(always)]
    pub const fn new(sec: u32, nsec: u32) -> Self {
        Self { sec, nsec }
    }

    /// Timestamp saat ini
    ///
    /// Detik di atas `u32::MAX` di-truncate, sama seperti field 32-bit di wire.
    pub fn now() -> Self {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(Self::from_duration)
            .unwrap_or_default()
    }

    /// Truncate ke lebar field wire (32-bit detik)
    #[inline(always)]
    pub fn from_duration(d: Duration) -> Self {
        Self {
            sec: d.as_secs() as u32,
            nsec: d.subsec_nanos(),
        }
    }

    /// `nsec` >= 1e9 ikut dinormalisasi oleh `Duration::new`
    #[inline(always)]
    pub fn to_duration(self) -> Duration {
        Duration::new(u64::from(self.sec), self.nsec)
    }

    pub fn to_system_time(self) -> SystemTime {
        UNIX_EPOCH + self.to_duration()
    }

    /// `nsec` berada di range sub-detik yang valid
    #[inline(always)]
    pub fn is_normalized(&self) -> bool {
        self.nsec < NSEC_PER_SEC
    }
}

impl From<Duration> for Timespec {
    fn from(d: Duration) -> Self {
        Self::from_duration(d)
    }
}

impl From<Timespec> for Duration {
    fn from(ts: Timespec) -> Self {
        ts.to_duration()
    }
}

/// Timestamp dalam layout wire (little-endian per field)
///
/// Dapat di-copy langsung dari/ke byte buffer tanpa parsing.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WireTimespec {
    pub sec: [u8; 4],
    pub nsec: [u8; 4],
}

impl WireTimespec {
    #[inline(always)]
    pub fn from_bytes(bytes: [u8; TIMESPEC_ENCODED_LEN]) -> Self {
        Self {
            sec: [bytes[0], bytes[1], bytes[2], bytes[3]],
            nsec: [bytes[4], bytes[5], bytes[6], bytes[7]],
        }
    }

    #[inline(always)]
    pub fn to_bytes(self) -> [u8; TIMESPEC_ENCODED_LEN] {
        let mut out = [0u8; TIMESPEC_ENCODED_LEN];
        out[..4].copy_from_slice(&self.sec);
        out[4..].copy_from_slice(&self.nsec);
        out
    }
}

/// Wire -> host
#[inline(always)]
pub fn decode_timespec(wire: &WireTimespec) -> Timespec {
    Timespec {
        sec: u32::from_le_bytes(wire.sec),
        nsec: u32::from_le_bytes(wire.nsec),
    }
}

/// Host -> wire
#[inline(always)]
pub fn encode_timespec(ts: &Timespec) -> WireTimespec {
    WireTimespec {
        sec: ts.sec.to_le_bytes(),
        nsec: ts.nsec.to_le_bytes(),
    }
}

impl<'a> DecodeCursor<'a> {
    /// Decode timestamp record tanpa bounds check.
    ///
    /// # Panics
    /// Jika kurang dari 8 byte tersisa.
    #[inline(always)]
    pub fn decode_timespec(&mut self) -> Timespec {
        let mut raw = [0u8; TIMESPEC_ENCODED_LEN];
        self.decode_copy(&mut raw);
        decode_timespec(&WireTimespec::from_bytes(raw))
    }

    /// Untuk timestamp yang datang dari input luar
    #[inline(always)]
    pub fn decode_timespec_safe(&mut self) -> WireResult<Timespec> {
        self.need(TIMESPEC_ENCODED_LEN)?;
        Ok(self.decode_timespec())
    }
}

impl<'a> EncodeCursor<'a> {
    /// # Panics
    /// Jika kurang dari 8 byte tersisa.
    #[inline(always)]
    pub fn encode_timespec(&mut self, ts: &Timespec) {
        self.encode_copy(&encode_timespec(ts).to_bytes());
    }
}
