//! This file is the root of the `mempack` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`bridge`,
//!     `kernels`, etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the small public surface that embedding applications
//!     are expected to use.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;
pub mod config;
pub mod kernels;

mod error;
mod observability;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use bridge::{compress, decompress, ResultBuffer};
pub use config::CodecProfile;
pub use error::MempackError;
pub use kernels::checksum::Checksums;
pub use observability::init_logging;
