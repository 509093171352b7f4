//! Pure, stateless computation of the CRC32/Adler32 pair that accompanies
//! every buffer produced by the service.
//!
//! Checksums are always computed over *uncompressed* bytes: over the input
//! on the compression side, and over the produced output on the
//! decompression side, so the two ends of a round trip can be compared
//! directly. This layer never verifies a checksum against anything;
//! verification is the caller's responsibility.

use adler32::RollingAdler32;

use crate::config::DecompressFlags;

/// CRC32 of zero bytes of data.
pub const CRC32_INIT: u32 = 0;
/// Adler32 of zero bytes of data.
pub const ADLER32_INIT: u32 = 1;

/// The checksum pair reported with every produced buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksums {
    pub crc32: u32,
    pub adler32: u32,
}

impl Checksums {
    /// The identity pair: what each algorithm reports for empty data, and
    /// the value a deselected checksum falls back to.
    pub const EMPTY: Checksums = Checksums {
        crc32: CRC32_INIT,
        adler32: ADLER32_INIT,
    };
}

/// Computes both checksums over `data`.
pub fn compute(data: &[u8]) -> Checksums {
    Checksums {
        crc32: crc32fast::hash(data),
        adler32: RollingAdler32::from_buffer(data).hash(),
    }
}

/// Computes the checksums selected by the decompression flags; a deselected
/// algorithm reports its identity value.
pub fn compute_selected(data: &[u8], flags: &DecompressFlags) -> Checksums {
    Checksums {
        crc32: if flags.compute_crc32 {
            crc32fast::hash(data)
        } else {
            CRC32_INIT
        },
        adler32: if flags.compute_adler32 {
            RollingAdler32::from_buffer(data).hash()
        } else {
            ADLER32_INIT
        },
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
