//! The stateless entry points of the service: one borrowed buffer in, one
//! owned buffer out, synchronously, with no state retained between calls.

use crate::bridge::format::ResultBuffer;
use crate::config::CodecProfile;
use crate::error::MempackError;
use crate::kernels::checksum::Checksums;
use crate::kernels::zstd;

/// Compresses `input` into a newly allocated buffer.
///
/// The destination capacity equals `input.len()` — a heuristic upper bound,
/// not a guarantee. Input the codec cannot shrink below its own framing
/// overhead fails with `InsufficientCapacity` rather than silently growing
/// the estimate.
pub fn compress(input: &[u8]) -> Result<ResultBuffer, MempackError> {
    // 1. Handle the empty input case without a codec call.
    if input.is_empty() {
        return Ok(ResultBuffer::new(Vec::new(), Checksums::EMPTY));
    }

    // 2. Delegate to the codec with the fixed profile and the input-length
    //    capacity estimate.
    let profile = CodecProfile::fixed();
    let (data, checksums) = zstd::encode_memory(profile, input, input.len())?;

    log::debug!(
        "compress: {} -> {} bytes ({:.1}% of input)",
        input.len(),
        data.len(),
        100.0 * data.len() as f64 / input.len() as f64,
    );

    // 3. Hand the trimmed buffer to the caller.
    Ok(ResultBuffer::new(data, checksums))
}

/// Decompresses `input` into a buffer of exactly `expected_len` bytes.
///
/// `expected_len` is the caller's out-of-band record of the original size;
/// the compressed stream does not carry it. An understated value is reported
/// as `InsufficientCapacity`, never returned as silently truncated bytes; an
/// overstated value is harmless and the result's logical length is the
/// actual produced size.
pub fn decompress(input: &[u8], expected_len: usize) -> Result<ResultBuffer, MempackError> {
    // 1. An empty stream can only ever describe an empty buffer.
    if input.is_empty() {
        if expected_len != 0 {
            return Err(MempackError::InvalidInput(format!(
                "empty compressed input cannot produce {expected_len} bytes"
            )));
        }
        return Ok(ResultBuffer::new(Vec::new(), Checksums::EMPTY));
    }

    // 2. Delegate to the codec with the caller-declared capacity.
    let profile = CodecProfile::fixed();
    let (data, checksums) = zstd::decode_memory(profile, input, expected_len)?;

    log::debug!(
        "decompress: {} -> {} bytes (declared {})",
        input.len(),
        data.len(),
        expected_len
    );

    Ok(ResultBuffer::new(data, checksums))
}
