//! This module defines the single, unified error type for the entire mempack
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.
//!
//! Every status the external codec reports is translated into one of these
//! variants and propagated; no call ever returns partial destination bytes
//! alongside a swallowed status.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MempackError {
    /// The negotiated destination buffer could not hold the codec's output.
    /// For compression the capacity is the input-length estimate; for
    /// decompression it is the caller-declared expected length.
    #[error("destination buffer too small: capacity {capacity} bytes exhausted with output pending")]
    InsufficientCapacity { capacity: usize },

    /// The external codec reported a failure: a corrupted stream, a
    /// dictionary-window mismatch, or an internal error.
    #[error("codec failure: {0}")]
    Codec(String),

    /// The call was malformed before the codec was ever invoked.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
