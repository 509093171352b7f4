//! Defines the public result type handed back by the bridge: an owned byte
//! region with a logical length, carrying the checksum pair computed
//! alongside it.

use crate::kernels::checksum::Checksums;

/// An owned, immutable byte buffer produced by one compression or
/// decompression call.
///
/// The buffer is trimmed to its logical length before it is returned, so the
/// capacity a caller observes never includes the sizing estimate's excess,
/// and no uninitialized tail is ever exposed. Ownership transfers to the
/// caller on return; the service keeps no reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBuffer {
    data: Vec<u8>,
    checksums: Checksums,
}

impl ResultBuffer {
    /// Only the bridge operations produce buffers.
    pub(crate) fn new(mut data: Vec<u8>, checksums: Checksums) -> Self {
        // Drop the unused tail of the sizing estimate's allocation.
        data.shrink_to_fit();
        Self { data, checksums }
    }

    /// Logical length in bytes: the number of bytes the codec produced.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrows the produced bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// CRC32 over the uncompressed side of the call.
    pub fn crc32(&self) -> u32 {
        self.checksums.crc32
    }

    /// Adler32 over the uncompressed side of the call.
    pub fn adler32(&self) -> u32 {
        self.checksums.adler32
    }

    /// The full checksum pair as reported by the codec layer.
    pub fn checksums(&self) -> Checksums {
        self.checksums
    }

    /// Consumes the buffer, yielding the owned bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for ResultBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
