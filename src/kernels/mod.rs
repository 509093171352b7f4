//! This module serves as the public API for the collection of pure, stateless
//! kernels composed by the `bridge` layer.
//!
//! Each sub-module covers one concern of a single memory-to-memory call:
//! the external entropy codec, and the integrity checksums reported
//! alongside every produced buffer.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Integrity checksums computed over uncompressed bytes.
pub mod checksum;

/// Final stage: the external entropy codec (memory-to-memory).
pub mod zstd;
