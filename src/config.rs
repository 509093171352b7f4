//! The single source of truth for all mempack codec configuration.
//!
//! This module defines the unified `CodecProfile` struct, which is created
//! once at process start and then shared, read-only, by both the compression
//! and decompression sides. Both sides must observe the same dictionary
//! window for a round trip to succeed, so profile selection is a
//! startup-time decision, never a per-call parameter. This removes the
//! entire class of "mismatched profile" bugs at the cost of flexibility
//! (multi-profile support is an explicit non-goal).

use serde::{Deserialize, Serialize};

//==================================================================================
// I. Core Configuration Enums & Structs
//==================================================================================

/// Log2 of the dictionary window shared by both codec directions (1 MiB).
///
/// Changing this value breaks compatibility with any previously compressed
/// data and must be versioned if it is ever changed.
pub const DICT_SIZE_LOG2: u32 = 20;

/// Defines the trade-off between compression speed and final output size.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompressionLevel {
    /// Prioritizes speed over size.
    Fast,

    /// A balance between speed and size.
    #[default]
    Balanced,

    /// Prioritizes the smallest possible output at the cost of CPU time.
    Uber,
}

impl CompressionLevel {
    /// Maps the level onto the external codec's numeric scale.
    pub fn zstd_level(self) -> i32 {
        match self {
            CompressionLevel::Fast => 1,
            CompressionLevel::Balanced => 3,
            CompressionLevel::Uber => 19,
        }
    }
}

/// Feature flags applied on the compression side.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CompressFlags {
    /// Pin the codec to its single-pass mode so a given input always
    /// compresses to the same bytes, independent of thread scheduling.
    pub deterministic_parsing: bool,

    /// Trade decompression rate for compression ratio (long-distance
    /// matching in the external codec).
    pub favor_ratio: bool,
}

/// Feature flags applied on the decompression side.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DecompressFlags {
    /// Decode in one shot, straight into the destination buffer. When false,
    /// output streams through the codec's buffered reader instead.
    pub unbuffered_output: bool,

    /// Compute a CRC32 over the decompressed bytes.
    pub compute_crc32: bool,

    /// Compute an Adler32 over the decompressed bytes.
    pub compute_adler32: bool,
}

//==================================================================================
// II. The Unified CodecProfile
//==================================================================================

/// The complete parameter set shared between the encode and decode sides.
///
/// Invariant: `dict_size_log2` must be bit-identical on both sides — a
/// buffer compressed under window size W is only correctly decodable under
/// window size W. The decode side enforces its window as a hard ceiling, so
/// a mismatch surfaces as a reported codec failure rather than corrupt
/// output.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CodecProfile {
    pub dict_size_log2: u32,
    pub level: CompressionLevel,
    pub compress: CompressFlags,
    pub decompress: DecompressFlags,
}

impl CodecProfile {
    const FIXED: CodecProfile = CodecProfile {
        dict_size_log2: DICT_SIZE_LOG2,
        level: CompressionLevel::Uber,
        compress: CompressFlags {
            deterministic_parsing: true,
            favor_ratio: true,
        },
        decompress: DecompressFlags {
            unbuffered_output: true,
            compute_crc32: true,
            compute_adler32: true,
        },
    };

    /// Returns the one process-wide profile.
    ///
    /// Both codec directions reference this value; no public operation
    /// accepts an alternative.
    pub fn fixed() -> &'static CodecProfile {
        static PROFILE: CodecProfile = CodecProfile::FIXED;
        &PROFILE
    }
}

impl Default for CodecProfile {
    fn default() -> Self {
        Self::FIXED
    }
}

//==================================================================================
// III. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_profile_constants() {
        let profile = CodecProfile::fixed();

        assert_eq!(profile.dict_size_log2, 20);
        assert_eq!(profile.level, CompressionLevel::Uber);
        assert!(profile.compress.deterministic_parsing);
        assert!(profile.compress.favor_ratio);
        assert!(profile.decompress.unbuffered_output);
        assert!(profile.decompress.compute_crc32);
        assert!(profile.decompress.compute_adler32);
    }

    #[test]
    fn test_fixed_profile_is_a_single_instance() {
        let a = CodecProfile::fixed() as *const CodecProfile;
        let b = CodecProfile::fixed() as *const CodecProfile;
        assert_eq!(a, b);
    }

    #[test]
    fn test_level_mapping_is_monotonic() {
        assert!(CompressionLevel::Fast.zstd_level() < CompressionLevel::Balanced.zstd_level());
        assert!(CompressionLevel::Balanced.zstd_level() < CompressionLevel::Uber.zstd_level());
    }

    #[test]
    fn test_profile_serde_roundtrip() {
        let profile = CodecProfile::fixed();

        let json = serde_json::to_string(profile).unwrap();
        let back: CodecProfile = serde_json::from_str(&json).unwrap();

        assert_eq!(*profile, back);
        // snake_case field and variant names are part of the startup-config
        // contract.
        assert!(json.contains("\"dict_size_log2\":20"));
        assert!(json.contains("\"uber\""));
    }
}
