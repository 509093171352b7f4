// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing API of the mempack library. It owns
// the buffer-sizing negotiation between the caller and the external codec,
// and is the authoritative boundary between the outside world (borrowed byte
// slices) and the kernel layer.
//
// Data Flow (Compression):
//
//   1. [Stateless API (compress)]    -> Receives `&[u8]`
//         |
//         `-> a. Sizes the destination to the input length (upper-bound estimate)
//         |
//         `-> b. Calls `kernels::zstd::encode_memory` with the fixed profile
//
//   2. [Codec Adapter]               -> Returns `(Vec<u8>, Checksums)`, or an explicit
//                                       error when the destination filled early
//
//   3. [ResultBuffer]                -> Trimmed to logical length; ownership moves to
//                                       the caller
//
// Data Flow (Decompression):
//
//   1. [Stateless API (decompress)]  -> Receives `&[u8]` + the caller-declared output
//         |                             length (the stream does not self-describe it)
//         |
//         `-> a. Sizes the destination to exactly the declared length
//         |
//         `-> b. Calls `kernels::zstd::decode_memory` with the fixed profile
//
//   2. [Codec Adapter]               -> Returns produced bytes + checksums; a full
//                                       destination with output pending is an error,
//                                       never a truncated success
//
//   3. [ResultBuffer]                -> Handed to the caller, who owns integrity
//                                       verification against the reported checksums
//
// ====================================================================================
pub mod format;
pub mod stateless_api;

pub use format::ResultBuffer;
pub use stateless_api::{compress, decompress};
