//! Memory-to-memory adapter around the external Zstandard codec.
//!
//! This module is the codec collaborator boundary: both functions take the
//! shared profile, a borrowed input, and a destination capacity negotiated
//! by the bridge, and return the produced bytes together with the checksum
//! pair. This is a safe, panic-free wrapper around the `zstd` crate; every
//! status the codec reports is translated into an explicit error, and no
//! partial destination contents ever escape.

use std::io::Read;

use zstd::bulk;

use crate::config::CodecProfile;
use crate::error::MempackError;
use crate::kernels::checksum::{self, Checksums};

//==================================================================================
// 1. Status Translation
//==================================================================================

/// The canonical message the codec produces for its destination-full status.
/// The `zstd` crate surfaces raw `ZSTD_getErrorName` strings through
/// `io::Error`, so the message is the discriminator available at this level.
const DST_TOO_SMALL: &str = "Destination buffer is too small";

fn codec_err(err: std::io::Error) -> MempackError {
    MempackError::Codec(err.to_string())
}

/// Splits the codec's failure statuses into the two kinds the caller must
/// distinguish: a destination that filled with output pending, and
/// everything else.
fn classify(capacity: usize, err: std::io::Error) -> MempackError {
    if err.to_string().contains(DST_TOO_SMALL) {
        MempackError::InsufficientCapacity { capacity }
    } else {
        codec_err(err)
    }
}

//==================================================================================
// 2. Encode Path
//==================================================================================

fn new_compressor(profile: &CodecProfile) -> Result<bulk::Compressor<'static>, MempackError> {
    let mut compressor = bulk::Compressor::new(profile.level.zstd_level()).map_err(codec_err)?;
    compressor
        .window_log(profile.dict_size_log2)
        .map_err(codec_err)?;

    // The stream must not self-describe its decompressed size; callers keep
    // that value out-of-band.
    compressor.include_contentsize(false).map_err(codec_err)?;
    // The checksum contract lives in this layer, over uncompressed bytes,
    // not inside the codec's framing.
    compressor.include_checksum(false).map_err(codec_err)?;

    if profile.compress.favor_ratio {
        compressor.long_distance_matching(true).map_err(codec_err)?;
    }

    // Worker threads are only engaged when determinism is not required;
    // single-pass mode keeps output bytes independent of scheduling.
    #[cfg(feature = "multithread")]
    if !profile.compress.deterministic_parsing {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get() as u32)
            .unwrap_or(1);
        compressor.multithread(workers).map_err(codec_err)?;
    }

    Ok(compressor)
}

/// Compresses `input` into a destination of exactly `capacity` bytes.
///
/// Returns the produced bytes (length == bytes actually written) and the
/// checksum pair computed over `input`. A destination that fills with
/// output still pending is reported as `InsufficientCapacity`.
pub fn encode_memory(
    profile: &CodecProfile,
    input: &[u8],
    capacity: usize,
) -> Result<(Vec<u8>, Checksums), MempackError> {
    let mut compressor = new_compressor(profile)?;

    // A zero-filled destination of the exact negotiated capacity. Writing
    // into the slice (rather than a Vec's spare capacity, which the
    // allocator may round up) keeps the capacity contract exact and never
    // exposes uninitialized bytes.
    let mut dst = vec![0u8; capacity];
    let written = compressor
        .compress_to_buffer(input, &mut dst[..])
        .map_err(|e| classify(capacity, e))?;
    dst.truncate(written);

    log::trace!(
        "encode_memory: {} -> {} bytes (capacity {})",
        input.len(),
        written,
        capacity
    );

    Ok((dst, checksum::compute(input)))
}

//==================================================================================
// 3. Decode Path
//==================================================================================

/// Decompresses `input` into a destination of exactly `capacity` bytes.
///
/// Returns the produced bytes and the checksum pair selected by the
/// profile's decompression flags, computed over the produced output. A
/// destination that fills with output still pending is reported as
/// `InsufficientCapacity`, never returned truncated.
pub fn decode_memory(
    profile: &CodecProfile,
    input: &[u8],
    capacity: usize,
) -> Result<(Vec<u8>, Checksums), MempackError> {
    let out = if profile.decompress.unbuffered_output {
        decode_unbuffered(profile, input, capacity)?
    } else {
        decode_buffered(profile, input, capacity)?
    };

    log::trace!(
        "decode_memory: {} -> {} bytes (capacity {})",
        input.len(),
        out.len(),
        capacity
    );

    let sums = checksum::compute_selected(&out, &profile.decompress);
    Ok((out, sums))
}

/// Single-shot decode straight into the destination buffer.
fn decode_unbuffered(
    profile: &CodecProfile,
    input: &[u8],
    capacity: usize,
) -> Result<Vec<u8>, MempackError> {
    let mut decompressor = bulk::Decompressor::new().map_err(codec_err)?;
    decompressor
        .window_log_max(profile.dict_size_log2)
        .map_err(codec_err)?;

    let mut dst = vec![0u8; capacity];
    let written = decompressor
        .decompress_to_buffer(input, &mut dst[..])
        .map_err(|e| classify(capacity, e))?;
    dst.truncate(written);
    Ok(dst)
}

/// Streaming decode through the codec's buffered reader, with the declared
/// capacity enforced after the fact.
fn decode_buffered(
    profile: &CodecProfile,
    input: &[u8],
    capacity: usize,
) -> Result<Vec<u8>, MempackError> {
    let mut decoder = zstd::stream::read::Decoder::new(input).map_err(codec_err)?;
    decoder
        .window_log_max(profile.dict_size_log2)
        .map_err(codec_err)?;

    // Read one byte past the declared capacity so an understated capacity
    // is detected instead of silently truncated.
    let mut out = Vec::with_capacity(capacity);
    decoder
        .take(capacity as u64 + 1)
        .read_to_end(&mut out)
        .map_err(codec_err)?;

    if out.len() > capacity {
        return Err(MempackError::InsufficientCapacity { capacity });
    }
    Ok(out)
}

//==================================================================================
// 4. Unit Tests
//==================================================================================
